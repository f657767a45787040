//! Banner renderables, source selection and the print orchestrator.
//!
//! # Flow
//!
//! ```text
//! BannerPrinter ──► BannerSelector ──► Banners [ImageBanner, ResourceBanner]
//!       │                                              │
//!       ├─ fallback / DefaultBanner                    ▼
//!       ▼                                   PropertyResolverChain
//! PrintedBanner (replayable)
//! ```
//!
//! Every renderable implements [`Banner`](crate::port::Banner) and needs only
//! the environment, the optional source class and an output sink to render.

mod composite;
mod default;
mod image;
mod printed;
mod printer;
mod selector;
mod text;

pub use composite::Banners;
pub use default::DefaultBanner;
pub use image::ImageBanner;
pub use printed::PrintedBanner;
pub use printer::BannerPrinter;
pub use selector::{BannerSelector, BannerSources};
pub use text::ResourceBanner;

use crate::domain::Charset;
use crate::error::BannerError;
use crate::port::Environment;

/// Location of the text banner.
pub const BANNER_LOCATION_PROPERTY: &str = "spring.banner.location";

/// Location of the image banner.
pub const BANNER_IMAGE_LOCATION_PROPERTY: &str = "spring.banner.image.location";

/// Charset used to read banner text and decode log output.
pub const BANNER_CHARSET_PROPERTY: &str = "spring.banner.charset";

/// Text banner location used when [`BANNER_LOCATION_PROPERTY`] is unset.
pub const DEFAULT_BANNER_LOCATION: &str = "banner.txt";

/// Image extensions tried, in order, when no image location is configured.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["gif", "jpg", "png"];

/// Packaged resources whose bundled `banner.txt` must never be picked up.
pub const DEFAULT_EXCLUDED_SOURCES: [&str; 1] = ["liquibase-core"];

/// Charset configured by [`BANNER_CHARSET_PROPERTY`], UTF-8 when unset.
///
/// # Errors
///
/// Returns [`BannerError::UnsupportedCharset`] for an unknown charset name.
pub fn banner_charset(env: &dyn Environment) -> Result<Charset, BannerError> {
    Ok(env
        .parse_property::<Charset>(BANNER_CHARSET_PROPERTY)?
        .unwrap_or_default())
}
