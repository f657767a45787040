//! Identity of the code that launched the application.

use std::fmt;

/// Opaque reference to the application's main type.
///
/// Only used as a key for [`PackageMetadata`](crate::port::PackageMetadata)
/// lookups; the banner subsystem never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceClass(String);

impl SourceClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceClass {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
