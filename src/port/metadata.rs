//! Packaging metadata port.

use crate::domain::SourceClass;

/// Version and title metadata of the application that launched the banner.
pub trait PackageMetadata: Send + Sync {
    /// Implementation version of the package containing `source`.
    fn version(&self, source: Option<&SourceClass>) -> Option<String>;

    /// Implementation title of the package containing `source`.
    fn title(&self, source: Option<&SourceClass>) -> Option<String>;

    /// Version of the banner framework itself, exposed as `spring-boot.version`.
    fn framework_version(&self) -> Option<String> {
        Some(env!("CARGO_PKG_VERSION").to_string())
    }
}
