//! In-memory banner resources.

use std::collections::HashMap;
use std::io::{self, Read};
use std::sync::Arc;

use crate::port::{Resource, ResourceLoader};

/// Resource whose content lives in memory.
#[derive(Debug, Clone)]
pub struct InMemoryResource {
    location: String,
    content: Option<Vec<u8>>,
    url: Option<String>,
}

impl InMemoryResource {
    /// Existing resource with text content and a `memory:` URL.
    pub fn new(location: &str, content: &str) -> Self {
        Self::from_bytes(location, content.as_bytes().to_vec())
    }

    /// Existing resource with raw byte content.
    pub fn from_bytes(location: &str, content: Vec<u8>) -> Self {
        Self {
            location: location.to_string(),
            content: Some(content),
            url: Some(format!("memory:/{location}")),
        }
    }

    /// Resource that does not exist.
    pub fn missing(location: &str) -> Self {
        Self {
            location: location.to_string(),
            content: None,
            url: None,
        }
    }

    /// Replace the URL reported by [`Resource::url`].
    #[must_use]
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Make [`Resource::url`] fail.
    #[must_use]
    pub fn without_url(mut self) -> Self {
        self.url = None;
        self
    }
}

impl Resource for InMemoryResource {
    fn exists(&self) -> bool {
        self.content.is_some()
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        match &self.content {
            Some(bytes) => Ok(Box::new(bytes.as_slice())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", self.location),
            )),
        }
    }

    fn url(&self) -> io::Result<String> {
        self.url
            .clone()
            .ok_or_else(|| io::Error::other(format!("no URL for {}", self.location)))
    }

    fn description(&self) -> String {
        self.location.clone()
    }
}

/// Loader serving [`InMemoryResource`]s by location; unknown locations
/// resolve to missing resources.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceLoader {
    resources: HashMap<String, InMemoryResource>,
}

impl InMemoryResourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(self, location: &str, content: &str) -> Self {
        self.with_resource(InMemoryResource::new(location, content))
    }

    #[must_use]
    pub fn with_url(self, location: &str, content: &str, url: &str) -> Self {
        self.with_resource(InMemoryResource::new(location, content).with_url(url))
    }

    #[must_use]
    pub fn with_broken_url(self, location: &str, content: &str) -> Self {
        self.with_resource(InMemoryResource::new(location, content).without_url())
    }

    #[must_use]
    pub fn with_resource(mut self, resource: InMemoryResource) -> Self {
        self.resources.insert(resource.location.clone(), resource);
        self
    }
}

impl ResourceLoader for InMemoryResourceLoader {
    fn resource(&self, location: &str) -> Arc<dyn Resource> {
        match self.resources.get(location) {
            Some(resource) => Arc::new(resource.clone()),
            None => Arc::new(InMemoryResource::missing(location)),
        }
    }
}
