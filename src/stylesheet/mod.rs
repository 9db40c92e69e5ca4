//! Generators turning theme sources into CSS text.
//!
//! Everything here is a pure transform: token maps become custom-property
//! declarations, breakpoints become media-query blocks, font descriptors
//! become `@font-face` rules, and [`theme_styles`] assembles the full
//! cascade-layer stylesheet.

mod properties;
pub use properties::*;

mod media;
pub use media::*;

mod fonts;
pub use fonts::*;

mod layers;
pub use layers::*;
