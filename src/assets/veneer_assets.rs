#![allow(missing_docs)] // Derive macros generate undocumented methods.

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        use std::borrow::Cow;

        use anyhow::Result;
        use rust_embed::RustEmbed;

        use crate::assets::assets::AssetProvider;

        /// Embedded assets bundled with the veneer crate.
        #[derive(RustEmbed)]
        #[folder = "assets/"]
        #[include = "fonts/**/*.otf"]
        #[include = "fonts/**/*.ttf"]
        #[include = "fonts/**/*.woff2"]
        #[exclude = "*.DS_Store"]
        pub struct VeneerAssets;

        impl AssetProvider for VeneerAssets {
            fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
                <Self as RustEmbed>::get(path).map(|f| f.data)
            }

            fn list(&self, path: &str) -> Result<Vec<String>> {
                Ok(VeneerAssets::iter()
                    .filter_map(|p| p.starts_with(path).then(|| p.into()))
                    .collect())
            }
        }
    }
);

use enum_assoc::Assoc;

use crate::theme::FontVariantKind;

/// Built-in font asset identifiers that map to deployed static URLs.
///
/// Paths are case-sensitive and must match the served static-asset tree
/// byte for byte, legacy spellings included.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn path(&self) -> &'static str)]
#[func(pub fn variant(&self) -> FontVariantKind)]
pub enum FontAssetKind {
    /// Regular upright face.
    #[assoc(path = "/assets/fonts/Gotham-Book.otf")]
    #[assoc(variant = FontVariantKind::Book)]
    GothamBook,

    /// Regular italic face.
    #[assoc(path = "/assets/fonts/Gotham Book Italic.otf")]
    #[assoc(variant = FontVariantKind::BookItalic)]
    GothamBookItalic,

    /// Medium upright face.
    #[assoc(path = "/assets/fonts/Gotham-Medium.otf")]
    #[assoc(variant = FontVariantKind::Medium)]
    GothamMedium,

    /// Medium italic face.
    #[assoc(path = "/assets/fonts/Gotham-MediumItalic.otf")]
    #[assoc(variant = FontVariantKind::MediumItalic)]
    GothamMediumItalic,

    /// Bold upright face.
    #[assoc(path = "/assets/fonts/GOTHAM-BOLD.TTF")]
    #[assoc(variant = FontVariantKind::Bold)]
    GothamBold,

    /// Black italic face.
    #[assoc(path = "/assets/fonts/GOTHAM-BLACKITALIC.TTF")]
    #[assoc(variant = FontVariantKind::BlackItalic)]
    GothamBlackItalic,
}

impl FontAssetKind {
    /// All builtin font assets, in descriptor slot order.
    pub const ALL: [FontAssetKind; 6] = [
        FontAssetKind::GothamBook,
        FontAssetKind::GothamBookItalic,
        FontAssetKind::GothamMedium,
        FontAssetKind::GothamMediumItalic,
        FontAssetKind::GothamBold,
        FontAssetKind::GothamBlackItalic,
    ];
}
