use thiserror::Error;

use crate::theme::{FontDescriptor, FontVariantKind};

/// Encodings a `@font-face` `format(...)` hint can name.
///
/// The hint must match the served file's actual encoding; browsers with
/// strict MIME checks silently refuse a face whose hint disagrees with
/// the asset, so hints are always derived from the asset path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontFormat {
    Opentype,
    Truetype,
    Woff,
    Woff2,
}

impl FontFormat {
    /// Derives the format from an asset path's extension.
    ///
    /// Matching is case-insensitive, so legacy all-caps asset names like
    /// `GOTHAM-BOLD.TTF` resolve the same as lowercase ones.
    pub fn from_path(path: &str) -> Result<FontFormat, FontFormatError> {
        let unknown = || FontFormatError::UnknownFormat {
            path: path.to_string(),
        };

        let (_, extension) = path.rsplit_once('.').ok_or_else(unknown)?;

        match extension.to_ascii_lowercase().as_str() {
            "otf" => Ok(FontFormat::Opentype),
            "ttf" => Ok(FontFormat::Truetype),
            "woff" => Ok(FontFormat::Woff),
            "woff2" => Ok(FontFormat::Woff2),
            _ => Err(unknown()),
        }
    }

    /// The value placed inside the `format(...)` hint.
    pub fn hint(&self) -> &'static str {
        match self {
            FontFormat::Opentype => "opentype",
            FontFormat::Truetype => "truetype",
            FontFormat::Woff => "woff",
            FontFormat::Woff2 => "woff2",
        }
    }
}

#[derive(Error, Debug)]
pub enum FontFormatError {
    #[error("The font asset at \"{path}\" has no recognizable format extension.")]
    UnknownFormat { path: String },
}

/// Generates the six `@font-face` rules for a font descriptor.
///
/// One rule per [`FontVariantKind`], in slot order, each with the two
/// local fallbacks for its weight class, the asset URL with its derived
/// `format(...)` hint, and `font-display: swap`. The output keeps its
/// newlines; [`theme_styles`](crate::stylesheet::theme_styles) squishes it
/// along with everything else.
pub fn font_faces(descriptor: &FontDescriptor) -> Result<String, FontFormatError> {
    let family = descriptor.family_name();
    let mut rules = String::new();

    for variant in FontVariantKind::ALL {
        let asset = descriptor.asset(variant);
        let format = FontFormat::from_path(asset)?;

        let locals = variant
            .locals()
            .iter()
            .map(|local| format!("local('{local}')"))
            .collect::<Vec<_>>()
            .join(", ");

        rules.push_str(&format!(
            "
  @font-face {{
    font-family: '{family}';
    src: {locals},
         url('{asset}') format('{format}');
    font-weight: {weight};
    font-style: {style};
    font-display: swap;
  }}",
            format = format.hint(),
            weight = variant.weight(),
            style = variant.style(),
        ));
    }

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use smallvec::SmallVec;

    use super::*;

    fn descriptor() -> FontDescriptor {
        FontDescriptor {
            family: SmallVec::from_buf(["Gotham".to_string()]),
            book: "/assets/fonts/Gotham-Book.otf".to_string(),
            book_italic: "/assets/fonts/Gotham Book Italic.otf".to_string(),
            medium: "/assets/fonts/Gotham-Medium.otf".to_string(),
            medium_italic: "/assets/fonts/Gotham-MediumItalic.otf".to_string(),
            bold: "/assets/fonts/GOTHAM-BOLD.TTF".to_string(),
            black_italic: "/assets/fonts/GOTHAM-BLACKITALIC.TTF".to_string(),
        }
    }

    #[test]
    fn test_exactly_six_font_face_blocks() {
        let styles = font_faces(&descriptor()).unwrap();
        assert_eq!(
            styles.matches("@font-face").count(),
            6,
            "One rule per descriptor slot"
        );
        assert_eq!(styles.matches("font-display: swap;").count(), 6);
    }

    #[test]
    fn test_book_faces_use_opentype() {
        let styles = font_faces(&descriptor()).unwrap();

        assert!(styles.contains("url('/assets/fonts/Gotham-Book.otf') format('opentype')"));
        assert!(
            styles.contains("url('/assets/fonts/Gotham Book Italic.otf') format('opentype')"),
            "The italic book asset keeps its space and .otf hint"
        );
    }

    #[test]
    fn test_bold_faces_use_truetype() {
        let styles = font_faces(&descriptor()).unwrap();

        assert!(styles.contains("url('/assets/fonts/GOTHAM-BOLD.TTF') format('truetype')"));
        assert!(styles.contains("url('/assets/fonts/GOTHAM-BLACKITALIC.TTF') format('truetype')"));
    }

    #[test]
    fn test_rules_carry_weight_style_and_locals() {
        let styles = font_faces(&descriptor()).unwrap();

        assert!(styles.contains("src: local('Arial'), local('Helvetica'),"));
        assert!(styles.contains("src: local('Arial Black Italic'), local('Helvetica Black Oblique'),"));
        assert_eq!(styles.matches("font-weight: 500;").count(), 2);
        assert_eq!(styles.matches("font-style: italic;").count(), 3);
        assert_eq!(styles.matches("font-family: 'Gotham';").count(), 6);
    }

    #[test]
    fn test_unknown_extension_is_an_error() {
        let mut fonts = descriptor();
        fonts.bold = "/assets/fonts/GOTHAM-BOLD.eot".to_string();

        assert!(
            font_faces(&fonts).is_err(),
            "An extension without a known format hint should refuse to generate"
        );
    }

    #[test]
    fn test_format_from_path_is_case_insensitive() {
        assert_eq!(
            FontFormat::from_path("/x/A.TTF").unwrap(),
            FontFormat::Truetype
        );
        assert_eq!(
            FontFormat::from_path("/x/a.woff2").unwrap(),
            FontFormat::Woff2
        );
        assert!(FontFormat::from_path("/x/no-extension").is_err());
    }
}
