use indexmap::IndexMap;

use crate::theme::TokenMap;
use crate::utils::squish;

/// Transforms a token map into CSS custom property declarations.
///
/// Each entry becomes `--<key>: <value>;` in iteration order, collapsed
/// onto minimal whitespace. An empty map yields an empty string. Values
/// are emitted verbatim, malformed or not.
pub fn custom_properties(tokens: &TokenMap) -> String {
    squish(
        &tokens
            .iter()
            .map(|(key, value)| format!("--{key}: {value};"))
            .collect::<Vec<_>>()
            .join("\n\n"),
    )
}

/// Transforms a token map into an inline-style property map.
///
/// Every key gains a `--` prefix; values and entry order are unchanged.
pub fn style_object(tokens: &TokenMap) -> IndexMap<String, String> {
    let mut style = IndexMap::with_capacity(tokens.len());

    for (key, value) in tokens {
        style.insert(format!("--{key}"), value.clone());
    }

    style
}
