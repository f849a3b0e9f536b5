use async_trait::async_trait;
use std::fmt::Debug;
use std::io;
use std::path::PathBuf;
use tracing::trace;

use crate::loader::LoadError;

#[async_trait]
pub trait AssetLoader: Debug + Sync + Send {
    async fn load(&self, asset: &str) -> Result<(), LoadError>;
}

/// Serves the assets from a directory of static files.
#[derive(Debug, Clone)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self { Self { root: root.into() } }
}

#[async_trait]
impl AssetLoader for FsAssetLoader {
    async fn load(&self, asset: &str) -> Result<(), LoadError> {
        let path = self.root.join(asset);
        trace!("Loading asset {:?}", path);
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|err| LoadError::Asset(asset.to_string(), err))?;
        if !metadata.is_file() {
            return Err(LoadError::Asset(
                asset.to_string(),
                io::Error::new(io::ErrorKind::InvalidInput, "not a file"),
            ));
        }
        Ok(())
    }
}
