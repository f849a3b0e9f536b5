use tracing::trace;

use crate::asset::AssetLoader;
use crate::loader::LoadError;
use crate::state::RouteState;

/// A named UI module: its states and what it loads when the application
/// starts.
#[derive(Debug)]
pub struct UiModule {
    pub name:       String,
    /// Modules this one is built upon.
    pub requires:   Vec<String>,
    pub states:     Vec<RouteState>,
    /// Assets loaded one after the other at start-up.
    pub run_assets: Vec<String>,
}

impl UiModule {
    pub fn new<S: Into<String>>(name: S) -> Self {
        UiModule {
            name:       name.into(),
            requires:   Vec::new(),
            states:     Vec::new(),
            run_assets: Vec::new(),
        }
    }

    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires.extend(requires.into_iter().map(Into::into));
        self
    }

    pub fn with_state(mut self, state: RouteState) -> Self {
        self.states.push(state);
        self
    }

    pub fn with_run_assets<I, S>(mut self, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.run_assets.extend(assets.into_iter().map(Into::into));
        self
    }
}

/// Load `assets` in order, each one only after the previous one succeeded.
pub async fn load_in_series(
    loader: &dyn AssetLoader,
    assets: &[String],
) -> Result<(), LoadError> {
    for asset in assets {
        trace!("Loading run asset {}", asset);
        loader.load(asset).await?;
    }
    Ok(())
}
