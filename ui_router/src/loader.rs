use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use tracing::trace;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("No module is known at {0}")]
    NotFound(String),
    #[error("Failed to load the asset {0}: {1}")]
    Asset(String, #[source] std::io::Error),
}

/// A unit of UI code that can be loaded on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerModule {
    pub path:        String,
    /// Controllers registered once the module is loaded.
    pub controllers: Vec<String>,
}

impl ControllerModule {
    pub fn new<S: Into<String>>(path: S) -> Self {
        ControllerModule { path: path.into(), controllers: Vec::new() }
    }

    pub fn with_controller<S: Into<String>>(mut self, name: S) -> Self {
        self.controllers.push(name.into());
        self
    }

    pub fn provides(&self, controller: &str) -> bool {
        self.controllers.iter().any(|name| name == controller)
    }
}

#[async_trait]
pub trait ControllerLoader: Debug + Sync + Send {
    /// Load the module at `path` once every module of `requires` is loaded.
    async fn load(
        &self,
        path: &str,
        requires: &[String],
    ) -> Result<ControllerModule, LoadError>;
}

/// Loader over the modules compiled into the application.
#[derive(Debug, Default)]
pub struct CatalogLoader {
    catalog: HashMap<String, ControllerModule>,
}

impl CatalogLoader {
    pub fn new() -> Self { Self::default() }

    pub fn with_module(mut self, module: ControllerModule) -> Self {
        self.catalog.insert(module.path.clone(), module);
        self
    }

    fn lookup(&self, path: &str) -> Result<&ControllerModule, LoadError> {
        self.catalog
            .get(path)
            .ok_or_else(|| LoadError::NotFound(path.to_string()))
    }
}

#[async_trait]
impl ControllerLoader for CatalogLoader {
    async fn load(
        &self,
        path: &str,
        requires: &[String],
    ) -> Result<ControllerModule, LoadError> {
        for dependency in requires {
            trace!("Loading {} required by {}", dependency, path);
            self.lookup(dependency)?;
        }
        trace!("Loading {}", path);
        self.lookup(path).cloned()
    }
}
