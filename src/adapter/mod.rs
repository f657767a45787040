//! Concrete implementations of the collaborator ports.
//!
//! - [`MapEnvironment`] - In-memory configuration store
//! - [`FileSystemResourceLoader`] - Banner resources on local disk
//! - [`StaticMetadata`] - Version and title registered per source class
//! - [`TracingBannerLog`] - Log sink that emits `tracing` events

mod environment;
mod log;
mod metadata;
mod resource;

pub use environment::MapEnvironment;
pub use log::TracingBannerLog;
pub use metadata::StaticMetadata;
pub use resource::{FileResource, FileSystemResourceLoader};
