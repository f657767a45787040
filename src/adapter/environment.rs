//! Map-backed configuration store.

use std::collections::BTreeMap;

use crate::port::Environment;

/// Environment holding properties in memory.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    properties: BTreeMap<String, String>,
}

impl MapEnvironment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Environment for MapEnvironment {
    fn property(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_or_falls_back() {
        let env = MapEnvironment::new().with("a", "1");

        assert_eq!(env.property_or("a", "x"), "1");
        assert_eq!(env.property_or("b", "x"), "x");
    }

    #[test]
    fn typed_lookup() {
        let env = MapEnvironment::new().with("n", "42").with("bad", "forty");
        let env: &dyn Environment = &env;

        assert_eq!(env.parse_property::<u32>("n"), Ok(Some(42)));
        assert_eq!(env.parse_property::<u32>("missing"), Ok(None));
        assert!(env.parse_property::<u32>("bad").is_err());
    }

    #[test]
    fn collects_from_pairs() {
        let env: MapEnvironment = [("a", "1"), ("b", "2")].into_iter().collect();

        assert_eq!(env.len(), 2);
        assert_eq!(env.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
