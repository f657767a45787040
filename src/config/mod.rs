//! Configuration loading for the banner binary.

pub mod logging;
pub mod settings;

pub use logging::LoggingConfig;
pub use settings::Config;
