//! Decides which banner sources apply for a given environment.

use std::sync::Arc;

use tracing::debug;

use super::{
    Banners, ImageBanner, ResourceBanner, BANNER_IMAGE_LOCATION_PROPERTY,
    BANNER_LOCATION_PROPERTY, DEFAULT_BANNER_LOCATION, DEFAULT_EXCLUDED_SOURCES, IMAGE_EXTENSIONS,
};
use crate::port::{Banner, Environment, ImageRenderer, PackageMetadata, Resource, ResourceLoader};

/// Resources chosen for the image and text banners.
#[derive(Debug, Default, Clone)]
pub struct BannerSources {
    pub image: Option<Arc<dyn Resource>>,
    pub text: Option<Arc<dyn Resource>>,
}

impl BannerSources {
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.text.is_none()
    }
}

/// Picks the image and/or text banner for an environment.
///
/// Image: `spring.banner.image.location` when set (a missing file selects
/// nothing), otherwise the first of `banner.gif`, `banner.jpg`, `banner.png`.
/// Text: `spring.banner.location`, default `banner.txt`, unless its URL
/// matches an excluded packaged source.
pub struct BannerSelector {
    loader: Arc<dyn ResourceLoader>,
    metadata: Arc<dyn PackageMetadata>,
    image_renderer: Option<Arc<dyn ImageRenderer>>,
    excluded_sources: Vec<String>,
}

impl BannerSelector {
    pub fn new(loader: Arc<dyn ResourceLoader>, metadata: Arc<dyn PackageMetadata>) -> Self {
        Self {
            loader,
            metadata,
            image_renderer: None,
            excluded_sources: DEFAULT_EXCLUDED_SOURCES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Enable image banners. Without a renderer, located images are not selected.
    #[must_use]
    pub fn with_image_renderer(mut self, renderer: Arc<dyn ImageRenderer>) -> Self {
        self.image_renderer = Some(renderer);
        self
    }

    /// Replace the URL fragments that disqualify a text banner.
    #[must_use]
    pub fn with_excluded_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_sources = sources.into_iter().map(Into::into).collect();
        self
    }

    /// Whether located images can be turned into banners.
    pub fn renders_images(&self) -> bool {
        self.image_renderer.is_some()
    }

    pub fn excluded_sources(&self) -> &[String] {
        &self.excluded_sources
    }

    /// Find the banner resources without building banners.
    pub fn locate(&self, env: &dyn Environment) -> BannerSources {
        BannerSources {
            image: self.locate_image(env),
            text: self.locate_text(env),
        }
    }

    /// Build the banner for `env`: image then text, a single one, or `None`.
    pub fn select(&self, env: &dyn Environment) -> Option<Box<dyn Banner>> {
        let sources = self.locate(env);
        let mut banners = Banners::new();

        match (sources.image, &self.image_renderer) {
            (Some(resource), Some(renderer)) => {
                match ImageBanner::new(resource, Arc::clone(renderer)) {
                    Ok(banner) => banners.push(Box::new(banner)),
                    Err(e) => debug!(error = %e, "Image banner disappeared before use"),
                }
            }
            (Some(resource), None) => debug!(
                resource = %resource.description(),
                "No image renderer configured, skipping image banner"
            ),
            (None, _) => {}
        }

        if let Some(resource) = sources.text {
            match ResourceBanner::new(resource, Arc::clone(&self.metadata)) {
                Ok(banner) => banners.push(Box::new(banner)),
                Err(e) => debug!(error = %e, "Text banner disappeared before use"),
            }
        }

        banners.into_banner()
    }

    fn locate_image(&self, env: &dyn Environment) -> Option<Arc<dyn Resource>> {
        if let Some(location) = env
            .property(BANNER_IMAGE_LOCATION_PROPERTY)
            .filter(|l| !l.is_empty())
        {
            let resource = self.loader.resource(&location);
            if resource.exists() {
                return Some(resource);
            }
            debug!(location = %location, "Configured image banner not found");
            return None;
        }

        IMAGE_EXTENSIONS
            .iter()
            .map(|ext| self.loader.resource(&format!("banner.{ext}")))
            .find(|resource| resource.exists())
    }

    fn locate_text(&self, env: &dyn Environment) -> Option<Arc<dyn Resource>> {
        let location = env.property_or(BANNER_LOCATION_PROPERTY, DEFAULT_BANNER_LOCATION);
        let resource = self.loader.resource(&location);

        if !resource.exists() {
            debug!(location = %location, "Text banner not found");
            return None;
        }

        match resource.url() {
            Ok(url) if self.is_excluded(&url) => {
                debug!(url = %url, "Ignoring text banner from excluded source");
                None
            }
            Ok(_) => Some(resource),
            Err(e) => {
                debug!(location = %location, error = %e, "Text banner URL unavailable");
                None
            }
        }
    }

    fn is_excluded(&self, url: &str) -> bool {
        self.excluded_sources
            .iter()
            .any(|pattern| url.contains(pattern.as_str()))
    }
}
