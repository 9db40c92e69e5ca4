use crate::stylesheet::{self, FontFormatError};
use crate::theme::ThemeSource;

/// The stylesheet strings a host injects into its global styles.
///
/// Built once, explicitly, from a theme source; hosts pass the result
/// down instead of reaching for ambient constants.
#[derive(Debug, Clone)]
pub struct Stylesheets {
    /// The `@font-face` declarations on their own, for hosts that inline
    /// font loading separately from the theme layer.
    pub font_styles: String,
    /// The full cascade-layer stylesheet: layer order, root tokens,
    /// breakpoint overrides, theme selectors, and the font faces.
    pub theme_styles: String,
}

impl Stylesheets {
    /// Generates both stylesheets from a theme source.
    pub fn build(source: &ThemeSource) -> Result<Stylesheets, FontFormatError> {
        let font_styles = stylesheet::font_faces(&source.fonts)?;
        let theme_styles = stylesheet::theme_styles(source)?;

        log::debug!(
            "built stylesheets for source '{}' ({} bytes)",
            source.name,
            font_styles.len() + theme_styles.len()
        );

        Ok(Stylesheets {
            font_styles,
            theme_styles,
        })
    }
}

/// Builds the stylesheets for a theme source.
///
/// Call once during host startup and hand the result to whatever owns the
/// global stylesheet.
pub fn init(source: &ThemeSource) -> Result<Stylesheets, FontFormatError> {
    Stylesheets::build(source)
}
