//! Theme sources providing design tokens, breakpoints, and fonts.
//!
//! A [`ThemeSource`] holds the base token set, per-breakpoint token
//! overrides, named theme overrides (e.g. dark and light modes) and the
//! font descriptor the stylesheet generators consume.

mod schema;
pub use schema::*;

mod deserializers;

mod kinds;
pub use kinds::*;
