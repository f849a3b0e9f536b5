use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::asset::AssetLoader;
use crate::loader::ControllerLoader;
use crate::module::{load_in_series, UiModule};
use crate::registry::{RegistryError, StateRegistry};

#[derive(Debug)]
struct RegisteredModule {
    name:       String,
    run_assets: Vec<String>,
}

/// The set of UI modules making up the application and their router.
#[derive(Debug)]
pub struct Application {
    modules:  Vec<RegisteredModule>,
    registry: StateRegistry,
    assets:   Arc<dyn AssetLoader>,
}

impl Application {
    pub fn new(
        controllers: Arc<dyn ControllerLoader>,
        assets: Arc<dyn AssetLoader>,
    ) -> Self {
        Application {
            modules: Vec::new(),
            registry: StateRegistry::new(controllers),
            assets,
        }
    }

    /// Register every module and its states, then run the modules in
    /// registration order.
    pub async fn bootstrap(
        controllers: Arc<dyn ControllerLoader>,
        assets: Arc<dyn AssetLoader>,
        modules: Vec<UiModule>,
    ) -> Result<Self, RegistryError> {
        let mut application = Application::new(controllers, assets);
        for module in modules {
            application.register(module)?;
        }
        application.run().await;
        Ok(application)
    }

    /// Register `module` and its states.
    ///
    /// Either the module and all of its states are registered, or none are.
    pub fn register(&mut self, module: UiModule) -> Result<(), RegistryError> {
        if self.modules.iter().any(|known| known.name == module.name) {
            return Err(RegistryError::DuplicateModule(module.name));
        }

        let mut names = HashSet::new();
        for state in &module.states {
            if self.registry.contains(&state.name)
                || !names.insert(state.name.as_str())
            {
                return Err(RegistryError::DuplicateState(state.name.clone()));
            }
        }

        let UiModule { name, requires, states, run_assets } = module;
        debug!("Registering module {} (requires {:?})", name, requires);
        for state in states {
            self.registry.register(state)?;
        }
        self.modules.push(RegisteredModule { name, run_assets });
        Ok(())
    }

    /// Load the start-up assets of each module.
    ///
    /// A module whose assets fail to load is reported and skipped, the
    /// application keeps starting.
    pub async fn run(&self) {
        for module in &self.modules {
            if module.run_assets.is_empty() {
                continue;
            }
            match load_in_series(self.assets.as_ref(), &module.run_assets)
                .await
            {
                Ok(()) => info!(
                    "Loaded {} assets of module {}",
                    module.run_assets.len(),
                    module.name
                ),
                Err(err) => warn!(
                    "Failed to load the assets of module {}: {}",
                    module.name, err
                ),
            }
        }
    }

    pub fn router(&self) -> &StateRegistry { &self.registry }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|module| module.name.as_str())
    }
}
