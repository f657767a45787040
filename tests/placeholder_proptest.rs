//! Property-based tests for placeholder resolution.

use proptest::prelude::*;
use marquee::domain::{
    resolve_placeholders, MapPropertySource, PropertyResolverChain, PropertySource,
};

// ============================================================================
// Strategies
// ============================================================================

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,7}(\\.[a-z][a-z0-9-]{0,7}){0,2}"
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Text without a `${` prefix is never changed.
    #[test]
    fn text_without_prefix_is_unchanged(text in "[^$]{0,64}", key in key_strategy()) {
        let chain = PropertyResolverChain::new()
            .with_source(MapPropertySource::new("a").with(key, "value"));

        prop_assert_eq!(chain.resolve_placeholders(&text), text);
    }

    /// A known key is replaced by its value.
    #[test]
    fn known_key_yields_value(key in key_strategy(), value in "[^$]{0,32}") {
        let chain = PropertyResolverChain::new()
            .with_source(MapPropertySource::new("a").with(key.clone(), value.clone()));

        prop_assert_eq!(chain.resolve_placeholders(&format!("${{{key}}}")), value);
    }

    /// A value that refers to its own key expands once and keeps the inner token.
    #[test]
    fn self_reference_terminates(key in key_strategy(), text in "[^$]{0,16}") {
        let value = format!("{text}${{{key}}}");
        let chain = PropertyResolverChain::new()
            .with_source(MapPropertySource::new("a").with(key.clone(), value.clone()));

        prop_assert_eq!(chain.resolve_placeholders(&format!("${{{key}}}")), value);
    }

    /// Unknown keys are left exactly as written.
    #[test]
    fn unknown_key_passes_through(
        prefix in "[^$]{0,16}",
        key in key_strategy(),
        suffix in "[^$]{0,16}",
    ) {
        let text = format!("{prefix}${{{key}}}{suffix}");
        let chain = PropertyResolverChain::new().with_source(MapPropertySource::new("empty"));

        prop_assert_eq!(chain.resolve_placeholders(&text), text);
    }

    /// With no source holding the key, the inline default is used.
    #[test]
    fn default_applies_when_unresolved(key in key_strategy(), default in "[^}]{0,16}") {
        let text = format!("${{{key}:{default}}}");

        prop_assert_eq!(resolve_placeholders(&text, &[]), default);
    }

    /// The first source that has a key wins, whatever the later ones hold.
    #[test]
    fn first_source_wins(key in key_strategy(), high in "[a-z]{1,8}", low in "[a-z]{1,8}") {
        let first = MapPropertySource::new("high").with(key.clone(), high.clone());
        let second = MapPropertySource::new("low").with(key.clone(), low);
        let sources: [&dyn PropertySource; 2] = [&first, &second];

        prop_assert_eq!(resolve_placeholders(&format!("${{{key}}}"), &sources), high);
    }

    /// Resolution is deterministic.
    #[test]
    fn resolution_is_repeatable(text in "\\PC{0,64}", key in key_strategy()) {
        let chain = PropertyResolverChain::new()
            .with_source(MapPropertySource::new("a").with(key, "v"));

        prop_assert_eq!(chain.resolve_placeholders(&text), chain.resolve_placeholders(&text));
    }
}
