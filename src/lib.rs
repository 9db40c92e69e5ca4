pub mod components;

pub mod stylesheet;

pub mod theme;

mod utils;
pub use utils::squish;

mod assets;
pub use assets::*;

mod init;
pub use init::*;

pub use veneer_markup as markup;
