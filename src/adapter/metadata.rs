//! Packaging metadata registered up front.

use std::collections::HashMap;

use crate::domain::SourceClass;
use crate::port::PackageMetadata;

#[derive(Debug, Clone, Default)]
struct Entry {
    version: Option<String>,
    title: Option<String>,
}

/// [`PackageMetadata`] backed by a per-source registry.
///
/// Lookups with no source, or for an unregistered source, use the default
/// entry set with [`StaticMetadata::with_default`].
#[derive(Debug, Clone, Default)]
pub struct StaticMetadata {
    entries: HashMap<SourceClass, Entry>,
    default: Entry,
    framework_version: Option<String>,
}

impl StaticMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata for the running binary, taken from its Cargo package fields.
    #[must_use]
    pub fn for_package(title: &str, version: &str) -> Self {
        Self::new().with_default(Some(title), Some(version))
    }

    #[must_use]
    pub fn with_version(mut self, source: &str, version: &str) -> Self {
        self.entries.entry(SourceClass::new(source)).or_default().version =
            Some(version.to_string());
        self
    }

    #[must_use]
    pub fn with_title(mut self, source: &str, title: &str) -> Self {
        self.entries.entry(SourceClass::new(source)).or_default().title = Some(title.to_string());
        self
    }

    /// Metadata reported when the source is absent or unregistered.
    #[must_use]
    pub fn with_default(mut self, title: Option<&str>, version: Option<&str>) -> Self {
        self.default = Entry {
            version: version.map(str::to_string),
            title: title.map(str::to_string),
        };
        self
    }

    /// Override the reported framework version.
    #[must_use]
    pub fn with_framework_version(mut self, version: &str) -> Self {
        self.framework_version = Some(version.to_string());
        self
    }

    fn entry(&self, source: Option<&SourceClass>) -> &Entry {
        source
            .and_then(|s| self.entries.get(s))
            .unwrap_or(&self.default)
    }
}

impl PackageMetadata for StaticMetadata {
    fn version(&self, source: Option<&SourceClass>) -> Option<String> {
        self.entry(source).version.clone()
    }

    fn title(&self, source: Option<&SourceClass>) -> Option<String> {
        self.entry(source).title.clone()
    }

    fn framework_version(&self) -> Option<String> {
        self.framework_version
            .clone()
            .or_else(|| Some(env!("CARGO_PKG_VERSION").to_string()))
    }
}
