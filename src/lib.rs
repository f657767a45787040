//! Marquee - startup banner resolution and rendering.
//!
//! Chooses the banner an application prints when it starts, resolves
//! `${...}` placeholders in it from layered property sources, and writes it
//! to an output stream or a log sink.
//!
//! # Architecture
//!
//! - **`port`** - Traits for the collaborators: configuration store,
//!   resource loader, package metadata, image renderer, log sink
//! - **`domain`** - Placeholder resolution, ANSI codes, charsets, modes
//! - **`banner`** - Renderables and the selection/printing flow
//!   - `ResourceBanner` - Text banner with placeholder substitution
//!   - `ImageBanner` - Delegates to an `ImageRenderer`
//!   - `Banners` - Ordered composite
//!   - `DefaultBanner` - Built-in fallback
//!   - `BannerPrinter` - Selects, prints, returns a replayable `PrintedBanner`
//! - **`adapter`** - Filesystem resources, in-memory environment, static
//!   metadata, `tracing` log sink
//!
//! # Modules
//!
//! - [`config`] - TOML configuration with environment overrides
//! - [`cli`] - The `marquee` binary's commands and output
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Expose in-memory test doubles to integration tests
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use marquee::adapter::{
//!     FileSystemResourceLoader, MapEnvironment, StaticMetadata, TracingBannerLog,
//! };
//! use marquee::banner::{BannerPrinter, BannerSelector};
//! use marquee::domain::{BannerMode, SourceClass};
//!
//! let selector = BannerSelector::new(
//!     Arc::new(FileSystemResourceLoader::new("resources")),
//!     Arc::new(StaticMetadata::for_package("Demo", "1.0.0")),
//! );
//! let printer = BannerPrinter::new(selector);
//! let env = MapEnvironment::new().with("spring.output.ansi.enabled", "never");
//! let source = SourceClass::new("demo::App");
//!
//! let printed = printer.print(
//!     BannerMode::Console,
//!     &env,
//!     Some(&source),
//!     &TracingBannerLog,
//!     &mut std::io::stdout(),
//! );
//! ```

pub mod adapter;
pub mod banner;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
