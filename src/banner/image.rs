//! Banner drawn from an image resource by an external renderer.

use std::io::Write;
use std::sync::Arc;

use tracing::warn;

use crate::domain::SourceClass;
use crate::error::BannerError;
use crate::port::{Banner, Environment, ImageRenderer, Resource};

/// Image banner; pixel decoding is delegated to an [`ImageRenderer`].
pub struct ImageBanner {
    resource: Arc<dyn Resource>,
    renderer: Arc<dyn ImageRenderer>,
}

impl ImageBanner {
    /// Create a banner over an existing image resource.
    ///
    /// # Errors
    ///
    /// Returns [`BannerError::ResourceNotFound`] when the resource does not exist.
    pub fn new(
        resource: Arc<dyn Resource>,
        renderer: Arc<dyn ImageRenderer>,
    ) -> Result<Self, BannerError> {
        if !resource.exists() {
            return Err(BannerError::ResourceNotFound {
                location: resource.description(),
            });
        }
        Ok(Self { resource, renderer })
    }
}

impl Banner for ImageBanner {
    fn render(&self, env: &dyn Environment, _source: Option<&SourceClass>, out: &mut dyn Write) {
        if let Err(e) = self.renderer.render(self.resource.as_ref(), env, out) {
            warn!(
                resource = %self.resource.description(),
                kind = e.kind(),
                error = %e,
                "Image banner not printable"
            );
        }
    }
}
