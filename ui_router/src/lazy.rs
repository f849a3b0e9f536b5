use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::loader::{ControllerLoader, ControllerModule, LoadError};

/// Controller module loaded the first time a state needing it is entered.
///
/// A successful load is kept for every later entry. A failed one is not, the
/// next entry tries again.
#[derive(Debug)]
pub struct LazyController {
    path:     String,
    requires: Vec<String>,
    resolved: OnceCell<Arc<ControllerModule>>,
}

impl LazyController {
    pub fn new<S: Into<String>>(path: S, requires: Vec<String>) -> Self {
        LazyController {
            path: path.into(),
            requires,
            resolved: OnceCell::new(),
        }
    }

    pub fn requires(&self) -> &[String] { &self.requires }

    pub fn is_resolved(&self) -> bool { self.resolved.initialized() }

    pub async fn resolve(
        &self,
        loader: &dyn ControllerLoader,
    ) -> Result<Arc<ControllerModule>, LoadError> {
        self.resolved
            .get_or_try_init(|| async {
                debug!("Lazy loading controller module {}", self.path);
                loader.load(&self.path, &self.requires).await.map(Arc::new)
            })
            .await
            .cloned()
    }
}
