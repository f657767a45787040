//! Configuration store port.

use std::str::FromStr;

/// Read-only view of the application's configuration.
///
/// Keys are dotted property names such as `spring.banner.location`.
pub trait Environment {
    /// Look up a property, returning `None` when it is not set.
    fn property(&self, key: &str) -> Option<String>;

    /// Look up a property, falling back to `default` when it is not set.
    fn property_or(&self, key: &str, default: &str) -> String {
        self.property(key).unwrap_or_else(|| default.to_string())
    }
}

impl dyn Environment + '_ {
    /// Look up a property and convert it with [`FromStr`].
    ///
    /// # Errors
    ///
    /// Returns the conversion error when the property is set but does not parse.
    pub fn parse_property<T: FromStr>(&self, key: &str) -> Result<Option<T>, T::Err> {
        self.property(key).map(|raw| raw.parse()).transpose()
    }
}
