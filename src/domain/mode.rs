//! Where a banner goes, if anywhere.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::port::Environment;

/// Configuration key selecting the banner mode.
pub const BANNER_MODE_PROPERTY: &str = "spring.main.banner-mode";

/// Banner destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BannerMode {
    /// Don't print a banner.
    Off,
    /// Print to the output stream.
    #[default]
    Console,
    /// Print through the log sink.
    Log,
}

impl BannerMode {
    /// Read [`BANNER_MODE_PROPERTY`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the property holds an unknown mode.
    pub fn from_environment(env: &dyn Environment) -> Result<Self, ConfigError> {
        Ok(env.parse_property(BANNER_MODE_PROPERTY)?.unwrap_or_default())
    }
}

impl FromStr for BannerMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "console" => Ok(Self::Console),
            "log" => Ok(Self::Log),
            other => Err(ConfigError::InvalidValue {
                field: BANNER_MODE_PROPERTY,
                reason: format!("expected off, console or log, got '{other}'"),
            }),
        }
    }
}
