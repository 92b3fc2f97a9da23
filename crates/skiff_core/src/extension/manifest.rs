//! Extension manifest declaration and validation.
//!
//! # Responsibility
//! - Declare what one extension is and which channels it claims.
//!
//! # Invariants
//! - A manifest that validates can be registered without further checks on
//!   its declared data.

use crate::channel::name::is_valid_channel_name;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Declarative manifest for one extension.
///
/// The baseline is declaration-only: bundled extensions compiled into the
/// shell, no runtime loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionManifest {
    /// Stable extension identifier, e.g. `builtin.shell.diagnostics`.
    pub id: String,
    /// Extension version (`major.minor.patch`).
    pub version: String,
    /// Channel names this extension claims when attached.
    pub channels: Vec<String>,
}

impl ExtensionManifest {
    /// Validates declaration-level manifest invariants.
    pub fn validate(&self) -> Result<(), ManifestValidationError> {
        if self.id.trim().is_empty() {
            return Err(ManifestValidationError::EmptyId);
        }
        if !is_valid_extension_id(self.id.as_str()) {
            return Err(ManifestValidationError::InvalidId(self.id.clone()));
        }

        if !is_version_triplet(self.version.as_str()) {
            return Err(ManifestValidationError::InvalidVersion(
                self.version.clone(),
            ));
        }

        if self.channels.is_empty() {
            return Err(ManifestValidationError::MissingChannels);
        }
        let mut seen = BTreeSet::new();
        for channel in &self.channels {
            if !is_valid_channel_name(channel.as_str()) {
                return Err(ManifestValidationError::InvalidChannel(channel.clone()));
            }
            if !seen.insert(channel.as_str()) {
                return Err(ManifestValidationError::DuplicateChannel(channel.clone()));
            }
        }
        Ok(())
    }
}

// Extension ids are dotted lowercase identifiers with at least two
// segments, each segment a non-empty run of `[a-z0-9_]`.
fn is_valid_extension_id(value: &str) -> bool {
    let mut segments = 0usize;
    for segment in value.split('.') {
        let well_formed = !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !well_formed {
            return false;
        }
        segments += 1;
    }
    segments >= 2
}

// `major.minor.patch`, each part a non-empty run of ASCII digits.
fn is_version_triplet(value: &str) -> bool {
    let mut parts = value.split('.');
    let triplet = [parts.next(), parts.next(), parts.next()];
    if parts.next().is_some() {
        return false;
    }
    triplet.iter().all(|part| {
        matches!(part, Some(p) if !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
    })
}

/// Manifest validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestValidationError {
    EmptyId,
    InvalidId(String),
    InvalidVersion(String),
    MissingChannels,
    InvalidChannel(String),
    DuplicateChannel(String),
}

impl Display for ManifestValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "manifest id must not be empty"),
            Self::InvalidId(value) => write!(f, "manifest id is invalid: {value}"),
            Self::InvalidVersion(value) => write!(
                f,
                "manifest version is invalid: {value} (expected major.minor.patch)"
            ),
            Self::MissingChannels => write!(f, "manifest must claim at least one channel"),
            Self::InvalidChannel(value) => {
                write!(f, "manifest claims an invalid channel name: {value}")
            }
            Self::DuplicateChannel(value) => {
                write!(f, "manifest claims a channel twice: {value}")
            }
        }
    }
}

impl Error for ManifestValidationError {}
