//! Banner printed from a text resource with placeholder substitution.

use std::io::{Read, Write};
use std::sync::Arc;

use tracing::warn;

use super::banner_charset;
use crate::domain::{
    AnsiOutput, AnsiPropertySource, EnvironmentPropertySource, MapPropertySource,
    PropertyResolverChain, SourceClass,
};
use crate::error::BannerError;
use crate::port::{Banner, Environment, PackageMetadata, Resource};

/// Text banner loaded from a [`Resource`].
///
/// Placeholders are resolved against, in order of precedence:
///
/// 1. the environment
/// 2. version metadata (`application.version`, `application.formatted-version`,
///    `spring-boot.version`, `spring-boot.formatted-version`)
/// 3. ANSI codes (`AnsiColor.*`, `AnsiBackground.*`, `AnsiStyle.*`, `Ansi.*`)
/// 4. title metadata (`application.title`)
pub struct ResourceBanner {
    resource: Arc<dyn Resource>,
    metadata: Arc<dyn PackageMetadata>,
}

impl ResourceBanner {
    /// Create a banner over an existing resource.
    ///
    /// # Errors
    ///
    /// Returns [`BannerError::ResourceNotFound`] when the resource does not exist.
    pub fn new(
        resource: Arc<dyn Resource>,
        metadata: Arc<dyn PackageMetadata>,
    ) -> Result<Self, BannerError> {
        if !resource.exists() {
            return Err(BannerError::ResourceNotFound {
                location: resource.description(),
            });
        }
        Ok(Self { resource, metadata })
    }

    /// The resolver chain used for one render.
    pub fn resolver_chain<'a>(
        &self,
        env: &'a dyn Environment,
        source: Option<&SourceClass>,
    ) -> PropertyResolverChain<'a> {
        let ansi_enabled = AnsiOutput::from_environment(env).is_enabled();

        PropertyResolverChain::new()
            .with_source(EnvironmentPropertySource::new(env))
            .with_source(self.version_source(source))
            .with_source(AnsiPropertySource::new(ansi_enabled))
            .with_source(self.title_source(source))
    }

    fn version_source(&self, source: Option<&SourceClass>) -> MapPropertySource {
        let app = self.metadata.version(source);
        let framework = self.metadata.framework_version();

        MapPropertySource::new("version")
            .with("application.version", version_string(app.as_deref(), false))
            .with("spring-boot.version", version_string(framework.as_deref(), false))
            .with(
                "application.formatted-version",
                version_string(app.as_deref(), true),
            )
            .with(
                "spring-boot.formatted-version",
                version_string(framework.as_deref(), true),
            )
    }

    fn title_source(&self, source: Option<&SourceClass>) -> MapPropertySource {
        let title = self.metadata.title(source).unwrap_or_default();
        MapPropertySource::new("title").with("application.title", title)
    }

    /// Read, decode, resolve and re-encode the banner without writing it.
    fn render_bytes(
        &self,
        env: &dyn Environment,
        source: Option<&SourceClass>,
    ) -> Result<Vec<u8>, BannerError> {
        let charset = banner_charset(env)?;

        let mut raw = Vec::new();
        self.resource
            .open()
            .and_then(|mut reader| reader.read_to_end(&mut raw))
            .map_err(BannerError::Read)?;

        let text = charset.decode(&raw)?;
        let resolved = self.resolver_chain(env, source).resolve_placeholders(&text);

        let mut bytes = charset.encode(&resolved);
        bytes.extend(charset.encode("\n"));
        Ok(bytes)
    }
}

impl Banner for ResourceBanner {
    fn render(&self, env: &dyn Environment, source: Option<&SourceClass>, out: &mut dyn Write) {
        let result = self
            .render_bytes(env, source)
            .and_then(|bytes| out.write_all(&bytes).map_err(BannerError::Write));

        if let Err(e) = result {
            warn!(
                resource = %self.resource.description(),
                kind = e.kind(),
                error = %e,
                "Banner not printable"
            );
        }
    }
}

fn version_string(version: Option<&str>, formatted: bool) -> String {
    match version {
        None => String::new(),
        Some(v) if formatted => format!(" (v{v})"),
        Some(v) => v.to_string(),
    }
}
