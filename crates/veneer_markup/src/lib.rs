#![warn(missing_docs)]

//! Minimal HTML element model used by themed components.
//!
//! Elements are built with a chainable API and serialized to markup with
//! [`Element::to_html`]. Attribute order is insertion order, and text and
//! attribute values are escaped during serialization.

/// Element and node types plus markup serialization.
pub mod element;
pub use element::*;

mod escape;
