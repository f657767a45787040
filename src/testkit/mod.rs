//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`resource`] - In-memory [`Resource`](crate::port::Resource) and
//!   [`ResourceLoader`](crate::port::ResourceLoader): `InMemoryResource`,
//!   `InMemoryResourceLoader`.
//! - [`render`] - Recording collaborators and trivial banners:
//!   `RecordingImageRenderer`, `RecordingBannerLog`, `FixedBanner`,
//!   `SourceEchoBanner`.

pub mod render;
pub mod resource;

pub use render::{FixedBanner, RecordingBannerLog, RecordingImageRenderer, SourceEchoBanner};
pub use resource::{InMemoryResource, InMemoryResourceLoader};
