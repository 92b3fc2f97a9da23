//! Channel name validation.
//!
//! # Responsibility
//! - Enforce one naming discipline for every registered channel.
//!
//! # Invariants
//! - Validation applies at registration time only; dispatch accepts any
//!   string and simply finds no handler for invalid names.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on a channel name, in bytes.
pub const MAX_CHANNEL_NAME_LEN: usize = 128;

// Lowercase segment paths: `/`-separated segments, each one or more
// `.`/`_`/`-`-joined runs of ASCII lowercase or digits. Accepts
// `plugins.flutter.io/shared_preferences` and `skiff/diagnostics`.
static CHANNEL_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(?:[._-][a-z0-9]+)*(?:/[a-z0-9]+(?:[._-][a-z0-9]+)*)*$")
        .expect("valid channel name regex")
});

/// Returns whether `value` is an acceptable channel name.
///
/// # Contract
/// - Non-empty, at most [`MAX_CHANNEL_NAME_LEN`] bytes.
/// - Lowercase ASCII segments; separators never doubled or dangling.
pub fn is_valid_channel_name(value: &str) -> bool {
    !value.is_empty() && value.len() <= MAX_CHANNEL_NAME_LEN && CHANNEL_NAME_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_channel_name, MAX_CHANNEL_NAME_LEN};

    #[test]
    fn accepts_counterpart_layer_names() {
        assert!(is_valid_channel_name("plugins.flutter.io/shared_preferences"));
        assert!(is_valid_channel_name("skiff/diagnostics"));
        assert!(is_valid_channel_name("a"));
        assert!(is_valid_channel_name("a.b-c_d/e2"));
    }

    #[test]
    fn rejects_empty_and_uppercase_names() {
        assert!(!is_valid_channel_name(""));
        assert!(!is_valid_channel_name("Plugins.flutter.io/shared_preferences"));
        assert!(!is_valid_channel_name("SKIFF/DIAGNOSTICS"));
    }

    #[test]
    fn rejects_dangling_and_doubled_separators() {
        assert!(!is_valid_channel_name("/diagnostics"));
        assert!(!is_valid_channel_name("diagnostics/"));
        assert!(!is_valid_channel_name("skiff//diagnostics"));
        assert!(!is_valid_channel_name(".diagnostics"));
        assert!(!is_valid_channel_name("diagnostics."));
        assert!(!is_valid_channel_name("a..b"));
        assert!(!is_valid_channel_name("a._b"));
    }

    #[test]
    fn rejects_whitespace_and_non_ascii() {
        assert!(!is_valid_channel_name("skiff diagnostics"));
        assert!(!is_valid_channel_name("skiff/диагностика"));
    }

    #[test]
    fn rejects_names_over_length_bound() {
        let name = "a".repeat(MAX_CHANNEL_NAME_LEN + 1);
        assert!(!is_valid_channel_name(&name));

        let name = "a".repeat(MAX_CHANNEL_NAME_LEN);
        assert!(is_valid_channel_name(&name));
    }
}
