//! Renderable banner capability and its rendering collaborators.

use std::error::Error as StdError;
use std::io::Write;
use std::sync::Arc;

use super::{Environment, Resource};
use crate::domain::SourceClass;
use crate::error::BannerError;

/// Something that can print a startup banner.
///
/// Implementations never fail outward: problems are logged and the call
/// returns normally, so a broken banner can't abort startup.
pub trait Banner: Send + Sync {
    /// Render the banner to `out`.
    fn render(&self, env: &dyn Environment, source: Option<&SourceClass>, out: &mut dyn Write);
}

impl<B: Banner + ?Sized> Banner for Box<B> {
    fn render(&self, env: &dyn Environment, source: Option<&SourceClass>, out: &mut dyn Write) {
        (**self).render(env, source, out);
    }
}

impl<B: Banner + ?Sized> Banner for Arc<B> {
    fn render(&self, env: &dyn Environment, source: Option<&SourceClass>, out: &mut dyn Write) {
        (**self).render(env, source, out);
    }
}

/// Renders an image resource as ANSI/ASCII art.
pub trait ImageRenderer: Send + Sync {
    /// Write the art for `resource` to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error when the image can't be read or decoded.
    fn render(
        &self,
        resource: &dyn Resource,
        env: &dyn Environment,
        out: &mut dyn Write,
    ) -> Result<(), BannerError>;
}

/// Log sink used when the banner goes to the log instead of a stream.
pub trait BannerLog {
    /// Emit the rendered banner text.
    fn info(&self, message: &str);

    /// Report a failure to produce the banner text.
    fn warn(&self, message: &str, cause: &(dyn StdError + 'static));
}
