use std::{
    ops::{Deref, DerefMut},
    sync::LazyLock,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::deserializers::{de_max_width, de_string_or_non_empty_list, de_themes};
use super::kinds::FontVariantKind;

/// Ordered, flat mapping from token key to CSS value.
///
/// Keys are unique and carry no `--` prefix; iteration order is insertion
/// order and is preserved through every generator.
pub type TokenMap = IndexMap<String, String>;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSource {
    pub name: String,
    /// Tokens applied at `:root` outside any media query.
    pub base: TokenMap,
    /// Max-width breakpoints with their token overrides.
    #[serde(default)]
    pub breakpoints: IndexMap<String, Breakpoint>,
    /// Named theme override layers, selected by `data-theme` attribute.
    #[serde(deserialize_with = "de_themes")]
    pub themes: IndexMap<String, TokenMap>,
    pub fonts: FontDescriptor,
}

macro_rules! generate_builtin_sources {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockSource = LazyLockSource::new(|| ThemeSource::from_json(include_str!($path)).unwrap());
        )+
    };
}

pub struct LazyLockSource(LazyLock<ThemeSource>);

impl LazyLockSource {
    #[inline(always)]
    const fn new(f: fn() -> ThemeSource) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockSource {
    type Target = ThemeSource;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockSource {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<ThemeSource> for LazyLockSource {
    fn as_ref(&self) -> &ThemeSource {
        &self.0
    }
}

impl ThemeSource {
    generate_builtin_sources!(["../../themes/default.json", BUILTIN]);

    /// Deserializes a theme source from a JSON document.
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<ThemeSource, ThemeSourceError> {
        let source = serde_json::from_str(str.as_ref())?;
        log::debug!("parsed theme source");
        Ok(source)
    }

    /// The token override layer for a named theme, if the source has one.
    pub fn theme(&self, name: &str) -> Option<&TokenMap> {
        self.themes.get(name)
    }
}

#[derive(Error, Debug)]
pub enum ThemeSourceError {
    #[error("The theme source document does not match the expected shape.")]
    ParseTheme(#[from] serde_json::Error),
}

/// A max-width media breakpoint and the tokens that take over below it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Breakpoint {
    /// Viewport width in pixels at and below which the override applies.
    #[serde(deserialize_with = "de_max_width")]
    pub max_width: f32,
    pub tokens: TokenMap,
}

/// One logical font family with an asset path for each of the six
/// weight/style slots.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FontDescriptor {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[String; 1]>,
    pub book: String,
    pub book_italic: String,
    pub medium: String,
    pub medium_italic: String,
    pub bold: String,
    pub black_italic: String,
}

impl FontDescriptor {
    /// The family name used in generated `@font-face` rules.
    pub fn family_name(&self) -> &str {
        &self.family[0]
    }

    /// The asset path filling the given variant slot.
    pub fn asset(&self, variant: FontVariantKind) -> &str {
        match variant {
            FontVariantKind::Book => &self.book,
            FontVariantKind::BookItalic => &self.book_italic,
            FontVariantKind::Medium => &self.medium,
            FontVariantKind::MediumItalic => &self.medium_italic,
            FontVariantKind::Bold => &self.bold,
            FontVariantKind::BlackItalic => &self.black_italic,
        }
    }
}
