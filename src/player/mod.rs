//! Media source resolution.
//!
//! Maps the raw "media source" value of a song record to a descriptor the
//! presentation layer can render: an inline player, an outbound link, a
//! native audio element, or a typed failure.
//!
//! Resolution runs in two stages. [`classify`] picks exactly one
//! [`ProviderTag`] by substring inspection, then [`Resolver::resolve`] runs
//! that provider's extraction grammar. Classifying first means a malformed
//! but recognizable link reports a provider-specific failure.

/// Identifier extraction per provider
pub mod extract;
/// Localized captions and locale selection
pub mod labels;
/// Provider tags and classification
pub mod provider;
/// Descriptor construction and dispatch
pub mod resolve;
/// Resolution descriptors
pub mod types;

pub use labels::Locale;
pub use provider::{classify, ProviderTag};
pub use resolve::Resolver;
pub use types::{Dimension, FailureReason, ResolvedSource};

use serde_json::Value;

/// Resolve `raw` as classified under `tag`, with Russian captions.
///
/// Empty input yields a failure here; callers must go through
/// [`resolve_source`] to get "nothing to render" for it.
pub fn resolve(raw: &str, tag: ProviderTag) -> ResolvedSource {
    Resolver::default().resolve(raw, tag)
}

/// Classify and resolve a raw source value, with Russian captions.
///
/// `None` means there is nothing to render.
pub fn resolve_source(raw: Option<&str>) -> Option<ResolvedSource> {
    Resolver::default().resolve_source(raw)
}

/// Resolve a cell taken from tabular song data.
///
/// Only string cells can name a source; null, numbers, booleans, arrays
/// and objects are treated as nothing to render.
pub fn resolve_value(resolver: &Resolver, value: &Value) -> Option<ResolvedSource> {
    resolver.resolve_source(value.as_str())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_string_cells_render_nothing() {
        let resolver = Resolver::default();
        for cell in [json!(null), json!(42), json!(true), json!([]), json!({"url": "https://youtu.be/x"})] {
            assert!(resolve_value(&resolver, &cell).is_none(), "cell: {cell}");
        }
    }

    #[test]
    fn test_string_cell_resolves() {
        let resolved = resolve_value(&Resolver::default(), &json!("https://youtu.be/dQw4w9WgXcQ")).unwrap();
        assert_eq!(resolved.provider(), ProviderTag::Youtube);
    }

    #[test]
    fn test_free_functions_match_default_resolver() {
        let raw = "https://rutube.ru/video/c6cc4d620b1d4338901770a44b3e82f4/";
        assert_eq!(resolve_source(Some(raw)), Some(resolve(raw, classify(raw))));
    }
}
