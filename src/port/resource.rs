//! Resource loading port.

use std::fmt;
use std::io::{self, Read};
use std::sync::Arc;

/// A located banner source (text or image).
///
/// A handle may point at nothing; callers check [`Resource::exists`]
/// before reading.
pub trait Resource: fmt::Debug + Send + Sync {
    /// Whether the resource is present.
    fn exists(&self) -> bool;

    /// Open a byte stream over the resource contents.
    fn open(&self) -> io::Result<Box<dyn Read + '_>>;

    /// External form of the resource URL.
    fn url(&self) -> io::Result<String>;

    /// Human-readable identity used in log messages.
    fn description(&self) -> String;
}

/// Turns location strings into [`Resource`] handles.
pub trait ResourceLoader: Send + Sync {
    /// Resolve `location`. Never fails; a missing resource reports
    /// `exists() == false`.
    fn resource(&self, location: &str) -> Arc<dyn Resource>;
}
