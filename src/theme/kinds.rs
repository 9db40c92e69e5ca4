#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use smallvec::SmallVec;

/// Built-in theme variants selected through a `data-theme` attribute.
///
/// Use `attr()` for the attribute value and `next()` to cycle between
/// variants when wiring a toggle.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn attr(&self) -> &'static str)]
#[func(pub fn next(&self) -> ThemeVariantKind)]
pub enum ThemeVariantKind {
    /// Dark mode, the default variant.
    #[assoc(attr = "dark")]
    #[assoc(next = ThemeVariantKind::Light)]
    Dark,
    /// Light mode.
    #[assoc(attr = "light")]
    #[assoc(next = ThemeVariantKind::Dark)]
    Light,
}

impl Default for ThemeVariantKind {
    fn default() -> Self {
        Self::Dark
    }
}

/// The six weight/style slots of a font descriptor.
///
/// Each slot resolves to its CSS `font-weight`, `font-style`, and the two
/// local-font fallbacks appropriate to its weight class.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn weight(&self) -> &'static str)]
#[func(pub fn style(&self) -> &'static str)]
#[func(pub fn locals(&self) -> SmallVec<[&'static str; 2]>)]
pub enum FontVariantKind {
    /// Regular upright text.
    #[assoc(weight = "normal")]
    #[assoc(style = "normal")]
    #[assoc(locals = SmallVec::from_buf(["Arial", "Helvetica"]))]
    Book,

    /// Regular italic text.
    #[assoc(weight = "normal")]
    #[assoc(style = "italic")]
    #[assoc(locals = SmallVec::from_buf(["Arial Italic", "Helvetica Oblique"]))]
    BookItalic,

    /// Medium-weight upright text.
    #[assoc(weight = "500")]
    #[assoc(style = "normal")]
    #[assoc(locals = SmallVec::from_buf(["Arial Bold", "Helvetica Bold"]))]
    Medium,

    /// Medium-weight italic text.
    #[assoc(weight = "500")]
    #[assoc(style = "italic")]
    #[assoc(locals = SmallVec::from_buf(["Arial Bold Italic", "Helvetica Bold Oblique"]))]
    MediumItalic,

    /// Bold upright text.
    #[assoc(weight = "bold")]
    #[assoc(style = "normal")]
    #[assoc(locals = SmallVec::from_buf(["Arial Black", "Helvetica Black"]))]
    Bold,

    /// Black italic display text.
    #[assoc(weight = "900")]
    #[assoc(style = "italic")]
    #[assoc(locals = SmallVec::from_buf(["Arial Black Italic", "Helvetica Black Oblique"]))]
    BlackItalic,
}

impl FontVariantKind {
    /// All slots, in the order their `@font-face` rules are emitted.
    pub const ALL: [FontVariantKind; 6] = [
        FontVariantKind::Book,
        FontVariantKind::BookItalic,
        FontVariantKind::Medium,
        FontVariantKind::MediumItalic,
        FontVariantKind::Bold,
        FontVariantKind::BlackItalic,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_variant_attr_values() {
        assert_eq!(ThemeVariantKind::Dark.attr(), "dark");
        assert_eq!(ThemeVariantKind::Light.attr(), "light");
    }

    #[test]
    fn test_theme_variant_default_is_dark() {
        assert_eq!(ThemeVariantKind::default(), ThemeVariantKind::Dark);
    }

    #[test]
    fn test_theme_variant_next_cycles() {
        assert_eq!(ThemeVariantKind::Dark.next(), ThemeVariantKind::Light);
        assert_eq!(ThemeVariantKind::Light.next(), ThemeVariantKind::Dark);
        assert_eq!(
            ThemeVariantKind::Dark.next().next(),
            ThemeVariantKind::Dark,
            "Toggling twice should return to the start"
        );
    }

    #[test]
    fn test_font_variant_weights_and_styles() {
        assert_eq!(FontVariantKind::Book.weight(), "normal");
        assert_eq!(FontVariantKind::Book.style(), "normal");
        assert_eq!(FontVariantKind::MediumItalic.weight(), "500");
        assert_eq!(FontVariantKind::MediumItalic.style(), "italic");
        assert_eq!(FontVariantKind::Bold.weight(), "bold");
        assert_eq!(FontVariantKind::BlackItalic.weight(), "900");
        assert_eq!(FontVariantKind::BlackItalic.style(), "italic");
    }

    #[test]
    fn test_font_variant_locals_match_weight_class() {
        assert_eq!(FontVariantKind::Book.locals().as_slice(), ["Arial", "Helvetica"]);
        assert_eq!(
            FontVariantKind::Bold.locals().as_slice(),
            ["Arial Black", "Helvetica Black"],
            "Bold slots should fall back to black local faces"
        );
    }

    #[test]
    fn test_all_lists_every_slot_once() {
        assert_eq!(FontVariantKind::ALL.len(), 6, "There are exactly six slots");

        for (index, variant) in FontVariantKind::ALL.iter().enumerate() {
            let first = FontVariantKind::ALL
                .iter()
                .position(|other| other == variant);
            assert_eq!(first, Some(index), "Slots should not repeat");
        }
    }
}
