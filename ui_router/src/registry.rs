use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::try_join_all;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::loader::{ControllerLoader, ControllerModule, LoadError};
use crate::state::RouteState;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("A state named {0:?} is already registered")]
    DuplicateState(String),
    #[error("A module named {0:?} is already registered")]
    DuplicateModule(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("No state named {0:?}")]
    UnknownState(String),
    #[error("State {state:?} does not accept the parameter {param:?}")]
    UnknownParam { state: String, param: String },
    #[error("Failed to resolve {dependency:?} of state {state:?}: {source}")]
    Resolve {
        state:      String,
        dependency: String,
        #[source]
        source:     LoadError,
    },
    #[error("No loaded module of state {state:?} provides {controller:?}")]
    MissingController { state: String, controller: String },
}

/// A state that has been entered, with everything its views need.
#[derive(Debug, Clone)]
pub struct Activation {
    pub state:       Arc<RouteState>,
    pub params:      BTreeMap<String, Value>,
    /// Resolve name -> loaded module.
    pub controllers: BTreeMap<String, Arc<ControllerModule>>,
}

/// Router states by name.
#[derive(Debug)]
pub struct StateRegistry {
    states: DashMap<String, Arc<RouteState>>,
    loader: Arc<dyn ControllerLoader>,
}

impl StateRegistry {
    pub fn new(loader: Arc<dyn ControllerLoader>) -> Self {
        Self { states: DashMap::new(), loader }
    }

    pub fn register(&self, state: RouteState) -> Result<(), RegistryError> {
        match self.states.entry(state.name.clone()) {
            Entry::Occupied(entry) => {
                Err(RegistryError::DuplicateState(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                debug!("Registering state {} at {}", state.name, state.url);
                entry.insert(Arc::new(state));
                Ok(())
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Arc<RouteState>> {
        self.states.get(name).map(|state| state.value().clone())
    }

    pub fn url_for(&self, name: &str) -> Option<String> {
        self.states.get(name).map(|state| state.url.clone())
    }

    pub fn find_by_url(&self, url: &str) -> Option<Arc<RouteState>> {
        self.states
            .iter()
            .find(|state| state.matches_url(url))
            .map(|state| state.value().clone())
    }

    pub fn len(&self) -> usize { self.states.len() }

    pub fn is_empty(&self) -> bool { self.states.is_empty() }

    /// Enter the state `name`.
    ///
    /// Every lazy dependency of the state is resolved before the activation
    /// is handed out; if one fails, nothing is.
    #[instrument(level = "debug", skip(self))]
    pub async fn go(
        &self,
        name: &str,
        params: BTreeMap<String, Value>,
    ) -> Result<Activation, NavigationError> {
        let state = self
            .get(name)
            .ok_or_else(|| NavigationError::UnknownState(name.to_string()))?;

        let mut merged = state.params.clone();
        for (param, value) in params {
            if !state.params.contains_key(&param) {
                return Err(NavigationError::UnknownParam {
                    state: state.name.clone(),
                    param,
                });
            }
            merged.insert(param, value);
        }

        let state_name = state.name.as_str();
        let controllers = try_join_all(state.resolve.iter().map(
            |(dependency, lazy)| async move {
                lazy.resolve(self.loader.as_ref())
                    .await
                    .map(|module| (dependency.clone(), module))
                    .map_err(|source| NavigationError::Resolve {
                        state: state_name.to_string(),
                        dependency: dependency.clone(),
                        source,
                    })
            },
        ))
        .await?
        .into_iter()
        .collect::<BTreeMap<_, _>>();

        if !controllers.is_empty() {
            for view in state.views.values() {
                if !controllers.values().any(|m| m.provides(&view.controller)) {
                    return Err(NavigationError::MissingController {
                        state:      state.name.clone(),
                        controller: view.controller.clone(),
                    });
                }
            }
        }

        info!("Entered state {} ({})", state.name, state.url);
        Ok(Activation { state, params: merged, controllers })
    }
}
