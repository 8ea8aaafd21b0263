use crate::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Byte-level access to wherever inputs live and outputs go.
pub trait FileStore {
    fn fetch(&self, path: &str) -> Result<Vec<u8>>;
    fn write(&self, path: &str, bytes: &[u8]) -> Result<()>;
    fn exists(&self, path: &str) -> Result<bool>;
}

/// `FileStore` over a local directory. Store paths are relative to `root`.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(Error::Storage(format!("path escapes store root: {}", path)));
        }
        Ok(self.root.join(relative))
    }
}

impl FileStore for LocalFileStore {
    fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let local = self.resolve(path)?;
        tracing::debug!(path, local = %local.display(), "fetching");
        Ok(std::fs::read(local)?)
    }

    fn write(&self, path: &str, bytes: &[u8]) -> Result<()> {
        let local = self.resolve(path)?;
        if let Some(parent) = local.parent() {
            std::fs::create_dir_all(parent)?;
        }
        tracing::debug!(path, bytes = bytes.len(), "writing");
        std::fs::write(local, bytes)?;
        Ok(())
    }

    fn exists(&self, path: &str) -> Result<bool> {
        Ok(self.resolve(path)?.exists())
    }
}
