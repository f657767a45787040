//! `${token}` placeholder resolution over an ordered chain of property sources.
//!
//! The first source that knows a key wins. Tokens nobody knows are left in
//! the text untouched, so a banner with a typo still prints.
//!
//! Supported forms:
//!
//! - `${key}` - replaced by the first source's value, else left verbatim
//! - `${key:fallback}` - as above, but `fallback` is used when no source has `key`
//!
//! A fallback never shadows a value: `${application.version:x}` prints the
//! version when any source knows it, whatever the source order.
//!
//! There is no escaping and no nested token syntax: the first `}` closes a
//! token. Values looked up from a source are themselves resolved through the
//! same sources, so `greeting = "Hello ${application.title}"` expands fully.
//! A token that refers back to a key already being expanded is left as written.

use std::collections::BTreeMap;

use crate::port::Environment;

const PREFIX: &str = "${";
const SUFFIX: char = '}';
const DEFAULT_SEPARATOR: char = ':';

/// A named key/value lookup consulted during placeholder resolution.
pub trait PropertySource {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Value for `key`, if this source has one.
    fn property(&self, key: &str) -> Option<String>;
}

/// Property source backed by a fixed map.
#[derive(Debug, Clone, Default)]
pub struct MapPropertySource {
    name: String,
    values: BTreeMap<String, String>,
}

impl MapPropertySource {
    /// Create an empty source called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    /// Add a key/value pair.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl PropertySource for MapPropertySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn property(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Exposes an [`Environment`] as a property source.
pub struct EnvironmentPropertySource<'a> {
    env: &'a dyn Environment,
}

impl<'a> EnvironmentPropertySource<'a> {
    pub fn new(env: &'a dyn Environment) -> Self {
        Self { env }
    }
}

impl PropertySource for EnvironmentPropertySource<'_> {
    fn name(&self) -> &str {
        "environment"
    }

    fn property(&self, key: &str) -> Option<String> {
        self.env.property(key)
    }
}

/// Ordered list of property sources; earlier sources take precedence.
#[derive(Default)]
pub struct PropertyResolverChain<'a> {
    sources: Vec<Box<dyn PropertySource + 'a>>,
}

impl<'a> PropertyResolverChain<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source with lower precedence than every source already added.
    #[must_use]
    pub fn with_source(mut self, source: impl PropertySource + 'a) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Names of the sources in precedence order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Value from the first source that has `key`.
    pub fn resolve(&self, key: &str) -> Option<String> {
        self.sources.iter().find_map(|source| source.property(key))
    }

    /// Replace every resolvable `${...}` token in `text`.
    pub fn resolve_placeholders(&self, text: &str) -> String {
        substitute(text, |key| self.resolve(key))
    }
}

/// Resolve `${...}` tokens in `text` against `sources`, first match wins.
pub fn resolve_placeholders(text: &str, sources: &[&dyn PropertySource]) -> String {
    substitute(text, |key| sources.iter().find_map(|s| s.property(key)))
}

fn substitute<F>(text: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut expanding = Vec::new();
    substitute_within(text, &lookup, &mut expanding)
}

/// `expanding` holds the keys whose values are being resolved further up.
fn substitute_within<F>(text: &str, lookup: &F, expanding: &mut Vec<String>) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(PREFIX) {
        result.push_str(&rest[..start]);
        let after_prefix = &rest[start + PREFIX.len()..];

        let Some(end) = after_prefix.find(SUFFIX) else {
            // Unterminated: keep the remainder as-is.
            result.push_str(&rest[start..]);
            return result;
        };

        let verbatim = &rest[start..start + PREFIX.len() + end + 1];
        let token = &after_prefix[..end];
        let (key, default) = match token.split_once(DEFAULT_SEPARATOR) {
            Some((key, default)) => (key, Some(default)),
            None => (token, None),
        };

        if expanding.iter().any(|k| k == key) {
            result.push_str(verbatim);
        } else if let Some(value) = lookup(key) {
            expanding.push(key.to_string());
            result.push_str(&substitute_within(&value, lookup, expanding));
            expanding.pop();
        } else if let Some(default) = default {
            result.push_str(default);
        } else {
            result.push_str(verbatim);
        }

        rest = &after_prefix[end + 1..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str, pairs: &[(&str, &str)]) -> MapPropertySource {
        pairs
            .iter()
            .fold(MapPropertySource::new(name), |s, (k, v)| s.with(*k, *v))
    }

    #[test]
    fn replaces_known_tokens() {
        let chain = PropertyResolverChain::new().with_source(source("a", &[("name", "Demo")]));

        assert_eq!(chain.resolve_placeholders("Hello ${name}!"), "Hello Demo!");
    }

    #[test]
    fn leaves_unknown_tokens_verbatim() {
        let chain = PropertyResolverChain::new().with_source(source("a", &[]));

        assert_eq!(
            chain.resolve_placeholders("x ${missing} y"),
            "x ${missing} y"
        );
    }

    #[test]
    fn first_source_wins() {
        let chain = PropertyResolverChain::new()
            .with_source(source("high", &[("k", "high")]))
            .with_source(source("low", &[("k", "low"), ("only", "low-only")]));

        assert_eq!(chain.resolve_placeholders("${k}/${only}"), "high/low-only");
    }

    #[test]
    fn default_used_only_when_no_source_has_key() {
        let chain = PropertyResolverChain::new()
            .with_source(source("a", &[]))
            .with_source(source("b", &[("present", "yes")]));

        assert_eq!(chain.resolve_placeholders("${present:no}"), "yes");
        assert_eq!(chain.resolve_placeholders("${absent:fallback}"), "fallback");
        assert_eq!(chain.resolve_placeholders("${absent:}"), "");
    }

    #[test]
    fn unterminated_token_is_copied() {
        let chain = PropertyResolverChain::new().with_source(source("a", &[("k", "v")]));

        assert_eq!(chain.resolve_placeholders("${k} and ${k"), "v and ${k");
    }

    #[test]
    fn values_are_resolved_through_the_chain() {
        let chain = PropertyResolverChain::new()
            .with_source(source("env", &[("greeting", "Hello ${title}${suffix:!}")]))
            .with_source(source("meta", &[("title", "Demo")]));

        assert_eq!(chain.resolve_placeholders("${greeting}"), "Hello Demo!");
    }

    #[test]
    fn cyclic_values_stop_at_the_repeated_key() {
        let chain = PropertyResolverChain::new()
            .with_source(source("a", &[("a", "<${b}>"), ("b", "[${a}]"), ("me", "x${me}")]));

        assert_eq!(chain.resolve_placeholders("${a}"), "<[${a}]>");
        assert_eq!(chain.resolve_placeholders("${me}"), "x${me}");
        assert_eq!(chain.resolve_placeholders("${b} ${b}"), "[<${b}>] [<${b}>]");
    }

    #[test]
    fn fallback_never_shadows_a_lower_source() {
        let chain = PropertyResolverChain::new()
            .with_source(source("env", &[]))
            .with_source(source("version", &[("application.version", "1.0")]));

        assert_eq!(chain.resolve_placeholders("${application.version:x}"), "1.0");
    }

    #[test]
    fn first_closing_brace_ends_token() {
        let chain = PropertyResolverChain::new().with_source(source("a", &[("${inner", "x")]));

        assert_eq!(chain.resolve_placeholders("${${inner}}"), "x}");
    }

    #[test]
    fn handles_multibyte_text_around_tokens() {
        let chain = PropertyResolverChain::new().with_source(source("a", &[("t", "ü")]));

        assert_eq!(chain.resolve_placeholders("█ ${t} █"), "█ ü █");
    }

    #[test]
    fn slice_resolution_matches_chain() {
        let a = source("a", &[("k", "1")]);
        let b = source("b", &[("k", "2"), ("j", "3")]);

        assert_eq!(resolve_placeholders("${k}${j}", &[&a, &b]), "13");
    }

    #[test]
    fn source_names_in_order() {
        let chain = PropertyResolverChain::new()
            .with_source(source("first", &[]))
            .with_source(source("second", &[]));

        assert_eq!(chain.source_names(), vec!["first", "second"]);
    }
}
