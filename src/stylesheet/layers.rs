use crate::stylesheet::{FontFormatError, custom_properties, font_faces, media_token_properties};
use crate::theme::ThemeSource;
use crate::utils::squish;

/// Cascade layer precedence, lowest first; the generated rules all land in
/// the `theme` layer so host styles can override tokens.
const LAYER_STYLES: &str = "@layer theme, base, components, layout;";

fn token_styles(source: &ThemeSource) -> String {
    let theme_selectors = source
        .themes
        .iter()
        .map(|(name, tokens)| {
            format!(
                "[data-theme='{name}'] {{\n    {}\n  }}",
                custom_properties(tokens)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n  ");

    squish(&format!(
        "
  :root {{
    {base}
  }}

  {media}

  {theme_selectors}
",
        base = custom_properties(&source.base),
        media = media_token_properties(source),
    ))
}

/// Assembles the complete theme stylesheet for global injection.
///
/// The output declares the cascade layer order, then fills the `theme`
/// layer with root tokens, breakpoint overrides, one `[data-theme='<name>']`
/// selector per theme in source order, and the font faces.
pub fn theme_styles(source: &ThemeSource) -> Result<String, FontFormatError> {
    let font_styles = font_faces(&source.fonts)?;

    Ok(squish(&format!(
        "
  {LAYER_STYLES}

  @layer theme {{
    {token_styles}
    {font_styles}
  }}
",
        token_styles = token_styles(source),
    )))
}
