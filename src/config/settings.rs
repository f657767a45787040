//! Application configuration loading and validation.
//!
//! A TOML file is flattened into dotted property keys, so
//!
//! ```toml
//! [spring.banner]
//! location = "art/banner.txt"
//! ```
//!
//! becomes `spring.banner.location`. Environment variables override file
//! values using relaxed names (`SPRING_BANNER_LOCATION`).
//!
//! # Example
//!
//! ```no_run
//! use marquee::config::Config;
//! use marquee::port::Environment;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("marquee.toml")?;
//!     config.logging().init();
//!     println!("{:?}", config.property("spring.banner.location"));
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use toml::{Table, Value};

use super::logging::LoggingConfig;
use crate::banner::{
    BANNER_CHARSET_PROPERTY, BANNER_IMAGE_LOCATION_PROPERTY, BANNER_LOCATION_PROPERTY,
};
use crate::domain::ansi::ANSI_ENABLED_PROPERTY;
use crate::domain::mode::BANNER_MODE_PROPERTY;
use crate::domain::{AnsiOutput, BannerMode, Charset};
use crate::error::{ConfigError, Result};
use crate::port::Environment;

const LOGGING_TABLE: &str = "logging";

/// Keys an environment variable may set even when the file omits them.
const BOUND_PROPERTIES: [&str; 7] = [
    BANNER_LOCATION_PROPERTY,
    BANNER_IMAGE_LOCATION_PROPERTY,
    BANNER_CHARSET_PROPERTY,
    ANSI_ENABLED_PROPERTY,
    BANNER_MODE_PROPERTY,
    "application.title",
    "application.version",
];

/// Flattened application configuration.
///
/// Implements [`Environment`], so it can be handed straight to the banner
/// printer. [`Config::default`] is empty and reads nothing from the process.
#[derive(Debug, Clone, Default)]
pub struct Config {
    properties: BTreeMap<String, String>,
    logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content, applying process environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with(content, |name| std::env::var(name).ok())
    }

    /// Parse configuration from TOML content, taking overrides from `lookup`.
    ///
    /// `lookup` receives relaxed names such as `SPRING_MAIN_BANNER_MODE`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table: Table = toml::from_str(content).map_err(ConfigError::Parse)?;

        let logging = match table.get(LOGGING_TABLE) {
            Some(value) => value.clone().try_into().map_err(ConfigError::Parse)?,
            None => LoggingConfig::default(),
        };

        let mut properties = BTreeMap::new();
        flatten("", &table, &mut properties);

        let bound: Vec<String> = properties
            .keys()
            .cloned()
            .chain(BOUND_PROPERTIES.iter().map(ToString::to_string))
            .collect();
        for key in bound {
            if let Some(value) = lookup(&relaxed_name(&key)) {
                properties.insert(key, value);
            }
        }

        let config = Self {
            properties,
            logging,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Configuration taken from environment variables alone.
    ///
    /// # Errors
    ///
    /// Returns an error if an overridden value fails validation.
    pub fn from_env() -> Result<Self> {
        Self::parse_toml("")
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// The configured banner mode. Validation guarantees it parses.
    pub fn banner_mode(&self) -> BannerMode {
        BannerMode::from_environment(self).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// All properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn validate(&self) -> Result<()> {
        let env: &dyn Environment = self;

        env.parse_property::<Charset>(BANNER_CHARSET_PROPERTY)
            .map_err(|e| ConfigError::InvalidValue {
                field: BANNER_CHARSET_PROPERTY,
                reason: e.to_string(),
            })?;
        env.parse_property::<AnsiOutput>(ANSI_ENABLED_PROPERTY)?;
        env.parse_property::<BannerMode>(BANNER_MODE_PROPERTY)?;

        Ok(())
    }
}

impl Environment for Config {
    fn property(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }
}

/// Environment variable name bound to a property key.
///
/// Upper-cased, with `.` and `-` replaced by `_`.
pub fn relaxed_name(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '.' | '-' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

fn flatten(prefix: &str, table: &Table, out: &mut BTreeMap<String, String>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Value::Table(nested) => flatten(&path, nested, out),
            other => {
                out.insert(path, scalar(other));
            }
        }
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn parse(content: &str) -> Config {
        Config::parse_toml_with(content, no_env).expect("valid config")
    }

    #[test]
    fn nested_tables_become_dotted_keys() {
        let config = parse(
            r#"
            [spring.banner]
            location = "art/banner.txt"
            image.location = "art/logo.png"

            [spring.main]
            banner-mode = "log"
            "#,
        );

        assert_eq!(
            config.property("spring.banner.location").as_deref(),
            Some("art/banner.txt")
        );
        assert_eq!(
            config.property("spring.banner.image.location").as_deref(),
            Some("art/logo.png")
        );
        assert_eq!(config.banner_mode(), BannerMode::Log);
    }

    #[test]
    fn quoted_dotted_keys_are_kept() {
        let config = parse(r#""application.title" = "Demo""#);

        assert_eq!(config.property("application.title").as_deref(), Some("Demo"));
    }

    #[test]
    fn scalars_and_arrays_are_stringified() {
        let config = parse(
            r#"
            retries = 3
            ratio = 1.5
            enabled = true
            tags = ["a", "b", 3]
            "#,
        );

        assert_eq!(config.property("retries").as_deref(), Some("3"));
        assert_eq!(config.property("ratio").as_deref(), Some("1.5"));
        assert_eq!(config.property("enabled").as_deref(), Some("true"));
        assert_eq!(config.property("tags").as_deref(), Some("a,b,3"));
    }

    #[test]
    fn environment_overrides_file_values() {
        let vars: HashMap<&str, &str> = [
            ("SPRING_BANNER_LOCATION", "env.txt"),
            ("SPRING_MAIN_BANNER_MODE", "off"),
            ("CUSTOM_GREETING", "hey"),
        ]
        .into_iter()
        .collect();

        let config = Config::parse_toml_with(
            r#"
            custom.greeting = "hello"
            [spring.banner]
            location = "file.txt"
            "#,
            |name| vars.get(name).map(ToString::to_string),
        )
        .expect("valid config");

        assert_eq!(config.property("spring.banner.location").as_deref(), Some("env.txt"));
        assert_eq!(config.property("custom.greeting").as_deref(), Some("hey"));
        assert_eq!(config.banner_mode(), BannerMode::Off);
    }

    #[test]
    fn unknown_keys_are_not_bound_from_environment() {
        let config = Config::parse_toml_with("", |name| {
            (name == "SOME_OTHER_KEY").then(|| "x".to_string())
        })
        .expect("valid config");

        assert!(config.is_empty());
    }

    #[test]
    fn relaxed_names() {
        assert_eq!(relaxed_name("spring.banner.location"), "SPRING_BANNER_LOCATION");
        assert_eq!(relaxed_name("spring.main.banner-mode"), "SPRING_MAIN_BANNER_MODE");
    }

    #[test]
    fn rejects_unknown_charset() {
        let result = Config::parse_toml_with("spring.banner.charset = \"EBCDIC\"", no_env);

        match result {
            Err(Error::Config(ConfigError::InvalidValue { field, .. })) => {
                assert_eq!(field, BANNER_CHARSET_PROPERTY);
            }
            other => panic!("expected invalid charset, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_ansi_mode() {
        let result = Config::parse_toml_with("spring.output.ansi.enabled = \"sometimes\"", no_env);

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field, .. }))
                if field == ANSI_ENABLED_PROPERTY
        ));
    }

    #[test]
    fn rejects_unknown_banner_mode_from_environment() {
        let result = Config::parse_toml_with("", |name| {
            (name == "SPRING_MAIN_BANNER_MODE").then(|| "loud".to_string())
        });

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field, .. }))
                if field == BANNER_MODE_PROPERTY
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Config::parse_toml_with("[spring", no_env);

        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn logging_table_is_read() {
        let config = parse(
            r#"
            [logging]
            level = "debug"
            format = "json"
            "#,
        );

        assert_eq!(config.logging().level, "debug");
        assert_eq!(config.logging().format, "json");
    }

    #[test]
    fn default_is_empty() {
        let config = Config::default();

        assert!(config.is_empty());
        assert_eq!(config.banner_mode(), BannerMode::Console);
        assert_eq!(config.logging(), &LoggingConfig::default());
    }
}
