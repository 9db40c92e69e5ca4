mod squish;
pub use squish::*;
