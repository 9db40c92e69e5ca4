use crate::stylesheet::custom_properties;
use crate::theme::ThemeSource;
use crate::utils::squish;

/// Generates media queries for a source's breakpoint token overrides.
///
/// Each breakpoint becomes a squished
/// `@media (max-width: <width>px) { :root { ... } }` block; blocks are
/// joined with newlines in source iteration order.
pub fn media_token_properties(source: &ThemeSource) -> String {
    source
        .breakpoints
        .values()
        .map(|breakpoint| {
            squish(&format!(
                "
                @media (max-width: {}px) {{
                  :root {{
                    {}
                  }}
                }}
                ",
                breakpoint.max_width,
                custom_properties(&breakpoint.tokens)
            ))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
