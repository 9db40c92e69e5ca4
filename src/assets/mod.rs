mod assets;
pub use assets::*;
use cfg_if::cfg_if;

cfg_if!(
    if #[cfg(feature = "assets")] {
        mod veneer_assets;
        pub use veneer_assets::*;
    }
);
