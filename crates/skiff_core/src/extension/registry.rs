//! Extension registry and adapter contracts.
//!
//! # Responsibility
//! - Register extensions against the channel host during launch.
//! - Track which extension claims which channel.
//!
//! # Invariants
//! - Extension ids are unique per registry.
//! - An extension is recorded only after its adapter attached successfully;
//!   a failed attach leaves no registry entry.

use crate::channel::host::{ChannelError, MethodChannelHost};
use crate::extension::manifest::{ExtensionManifest, ManifestValidationError};
use log::info;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Source classification for one extension registration.
///
/// The baseline ships bundled extensions only; other origins are reserved
/// for later loading models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionOrigin {
    Bundled,
}

/// Registered extension snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredExtension {
    pub manifest: ExtensionManifest,
    pub origin: ExtensionOrigin,
}

/// Contract implemented by every registrable extension.
pub trait ExtensionAdapter {
    /// Declarative manifest for this extension.
    fn manifest(&self) -> &ExtensionManifest;

    /// Source classification recorded at registration time.
    fn origin(&self) -> ExtensionOrigin;

    /// Claims this extension's channels on the host.
    ///
    /// # Contract
    /// - Claims exactly the channels the manifest declares.
    fn attach(&self, host: &mut MethodChannelHost) -> Result<(), ChannelError>;
}

/// In-process registry for extension registrations.
#[derive(Debug, Default)]
pub struct ExtensionRegistry {
    entries: BTreeMap<String, RegisteredExtension>,
    channel_claims: BTreeMap<String, String>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one extension: validates its manifest, attaches it to the
    /// host, and records the registration.
    ///
    /// # Errors
    /// - `InvalidManifest` when declaration validation fails.
    /// - `DuplicateExtensionId` when the id is already registered.
    /// - `Channel` when the adapter fails to claim a channel (typically
    ///   because another handler holds it); no entry is recorded.
    pub fn register(
        &mut self,
        adapter: &impl ExtensionAdapter,
        host: &mut MethodChannelHost,
    ) -> Result<(), ExtensionError> {
        let manifest = adapter.manifest().clone();
        manifest
            .validate()
            .map_err(ExtensionError::InvalidManifest)?;
        if self.entries.contains_key(manifest.id.as_str()) {
            return Err(ExtensionError::DuplicateExtensionId(manifest.id));
        }

        adapter.attach(host)?;

        for channel in &manifest.channels {
            self.channel_claims
                .insert(channel.clone(), manifest.id.clone());
        }
        info!(
            "event=extension_register module=extension status=ok id={} channels={}",
            manifest.id,
            manifest.channels.len()
        );
        self.entries.insert(
            manifest.id.clone(),
            RegisteredExtension {
                manifest,
                origin: adapter.origin(),
            },
        );
        Ok(())
    }

    /// Returns one registered extension by id.
    pub fn get(&self, extension_id: &str) -> Option<&RegisteredExtension> {
        self.entries.get(extension_id)
    }

    /// Returns the id of the extension that claimed `channel`, if any.
    pub fn claimed_by(&self, channel: &str) -> Option<&str> {
        self.channel_claims.get(channel).map(String::as_str)
    }

    /// Returns registered extension ids in sorted order.
    pub fn extension_ids(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extension registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    InvalidManifest(ManifestValidationError),
    DuplicateExtensionId(String),
    Channel(ChannelError),
}

impl Display for ExtensionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidManifest(err) => write!(f, "invalid extension manifest: {err}"),
            Self::DuplicateExtensionId(value) => {
                write!(f, "extension id already registered: {value}")
            }
            Self::Channel(err) => write!(f, "extension channel claim failed: {err}"),
        }
    }
}

impl Error for ExtensionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidManifest(err) => Some(err),
            Self::DuplicateExtensionId(_) => None,
            Self::Channel(err) => Some(err),
        }
    }
}

impl From<ChannelError> for ExtensionError {
    fn from(value: ChannelError) -> Self {
        Self::Channel(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{ExtensionAdapter, ExtensionError, ExtensionOrigin, ExtensionRegistry};
    use crate::channel::call::{MethodCall, MethodReply};
    use crate::channel::host::{ChannelError, MethodChannelHost};
    use crate::extension::manifest::ExtensionManifest;

    struct StaticExtension {
        manifest: ExtensionManifest,
    }

    impl StaticExtension {
        fn new(id: &str, channel: &str) -> Self {
            Self {
                manifest: ExtensionManifest {
                    id: id.to_string(),
                    version: "0.1.0".to_string(),
                    channels: vec![channel.to_string()],
                },
            }
        }
    }

    impl ExtensionAdapter for StaticExtension {
        fn manifest(&self) -> &ExtensionManifest {
            &self.manifest
        }

        fn origin(&self) -> ExtensionOrigin {
            ExtensionOrigin::Bundled
        }

        fn attach(&self, host: &mut MethodChannelHost) -> Result<(), ChannelError> {
            host.register_handler(self.manifest.channels[0].clone(), |_call: &MethodCall| {
                MethodReply::NotImplemented
            })
        }
    }

    #[test]
    fn registers_extension_and_records_claims() {
        let mut registry = ExtensionRegistry::new();
        let mut host = MethodChannelHost::new();
        let extension = StaticExtension::new("builtin.test.alpha", "skiff/alpha");

        registry
            .register(&extension, &mut host)
            .expect("registration");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.claimed_by("skiff/alpha"), Some("builtin.test.alpha"));
        assert!(host.has_handler("skiff/alpha"));

        let entry = registry.get("builtin.test.alpha").expect("entry");
        assert_eq!(entry.origin, ExtensionOrigin::Bundled);
    }

    #[test]
    fn rejects_duplicate_extension_id() {
        let mut registry = ExtensionRegistry::new();
        let mut host = MethodChannelHost::new();
        registry
            .register(
                &StaticExtension::new("builtin.test.alpha", "skiff/alpha"),
                &mut host,
            )
            .expect("first registration");

        let err = registry
            .register(
                &StaticExtension::new("builtin.test.alpha", "skiff/beta"),
                &mut host,
            )
            .expect_err("duplicate id must fail");
        assert_eq!(
            err,
            ExtensionError::DuplicateExtensionId("builtin.test.alpha".to_string())
        );
    }

    #[test]
    fn rejects_invalid_manifest_before_attach() {
        let mut registry = ExtensionRegistry::new();
        let mut host = MethodChannelHost::new();
        let extension = StaticExtension::new("bad id", "skiff/alpha");

        let err = registry
            .register(&extension, &mut host)
            .expect_err("invalid manifest must fail");
        assert!(matches!(err, ExtensionError::InvalidManifest(_)));
        assert!(host.is_empty());
    }

    #[test]
    fn failed_attach_leaves_no_entry() {
        let mut registry = ExtensionRegistry::new();
        let mut host = MethodChannelHost::new();
        host.register_handler("skiff/alpha", |_call: &MethodCall| MethodReply::NotImplemented)
            .expect("pre-claim channel");

        let err = registry
            .register(
                &StaticExtension::new("builtin.test.alpha", "skiff/alpha"),
                &mut host,
            )
            .expect_err("claim conflict must fail");
        assert!(matches!(
            err,
            ExtensionError::Channel(ChannelError::HandlerAlreadyInstalled(_))
        ));
        assert!(registry.is_empty());
        assert_eq!(registry.claimed_by("skiff/alpha"), None);
    }
}
