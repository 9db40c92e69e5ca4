use std::borrow::Cow;

use anyhow::{Result, anyhow};
use smallvec::SmallVec;

/// An ordered chain of asset providers; the first provider that resolves
/// a path wins.
pub struct Assets<const N: usize> {
    providers: SmallVec<[Box<dyn AssetProvider>; N]>,
}

impl<const N: usize> Assets<N> {
    pub fn new(providers: [Box<dyn AssetProvider>; N]) -> Assets<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }

    /// Loads an asset by path. An empty path resolves to `None`; a path
    /// no provider knows is an error.
    pub fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        for provider in &self.providers {
            let asset = provider.get(path);

            if asset.is_some() {
                return Ok(asset);
            }
        }

        log::warn!("no provider resolved asset at path \"{path}\"");
        Err(anyhow!("could not find asset at path \"{path}\""))
    }

    /// Lists every provider's assets under a path prefix.
    pub fn list(&self, path: &str) -> Result<Vec<String>> {
        Ok(self
            .providers
            .iter()
            .flat_map(|assets| assets.list(path).into_iter())
            .flatten()
            .collect())
    }
}

#[macro_export]
macro_rules! assets {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::Assets::new([
            $( Box::new($item) ),*
        ])
    };
}

/// A source of static asset bytes, e.g. an embedded bundle or a directory
/// mirror of the deployed static file tree.
pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MapProvider(Vec<(&'static str, &'static [u8])>);

    impl AssetProvider for MapProvider {
        fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
            self.0
                .iter()
                .find(|(known, _)| *known == path)
                .map(|(_, bytes)| Cow::Borrowed(*bytes))
        }

        fn list(&self, path: &str) -> Result<Vec<String>> {
            Ok(self
                .0
                .iter()
                .filter(|(known, _)| known.starts_with(path))
                .map(|(known, _)| known.to_string())
                .collect())
        }
    }

    #[test]
    fn test_empty_path_resolves_to_none() {
        let assets = assets![MapProvider(vec![])];
        assert!(assets.load("").unwrap().is_none());
    }

    #[test]
    fn test_first_provider_wins() {
        let assets = assets![
            MapProvider(vec![("fonts/a.otf", b"first" as &[u8])]),
            MapProvider(vec![("fonts/a.otf", b"second" as &[u8])]),
        ];

        let bytes = assets.load("fonts/a.otf").unwrap().unwrap();
        assert_eq!(
            bytes.as_ref(),
            b"first",
            "Providers earlier in the chain shadow later ones"
        );
    }

    #[test]
    fn test_unknown_path_is_an_error() {
        let assets = assets![MapProvider(vec![("fonts/a.otf", b"x" as &[u8])])];
        assert!(assets.load("fonts/missing.otf").is_err());
    }

    #[test]
    fn test_list_aggregates_every_provider() {
        let assets = assets![
            MapProvider(vec![("fonts/a.otf", b"x" as &[u8])]),
            MapProvider(vec![("fonts/b.ttf", b"y" as &[u8]), ("icons/c.svg", b"z" as &[u8])]),
        ];

        let fonts = assets.list("fonts/").unwrap();
        assert_eq!(fonts, ["fonts/a.otf", "fonts/b.ttf"]);
    }
}
