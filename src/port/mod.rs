//! Trait definitions for the collaborators the banner subsystem consumes.
//!
//! Ports are the seams between banner logic and the outside world:
//! configuration, resource loading, packaging metadata, image rendering and
//! the log sink. Adapters in [`crate::adapter`] implement them.
//!
//! # Available Ports
//!
//! - [`Environment`] - Configuration store lookups
//! - [`ResourceLoader`], [`Resource`] - Locating and reading banner sources
//! - [`PackageMetadata`] - Version and title of the launching application
//! - [`ImageRenderer`] - ANSI/ASCII rendering of image banners
//! - [`BannerLog`] - Log sink for banners printed in log mode
//! - [`Banner`] - The renderable capability itself

mod banner;
mod environment;
mod metadata;
mod resource;

pub use banner::{Banner, BannerLog, ImageRenderer};
pub use environment::Environment;
pub use metadata::PackageMetadata;
pub use resource::{Resource, ResourceLoader};
