use async_trait::async_trait;
use std::path::PathBuf;

use super::CatalogSource;
use crate::error::FetchError;

/// Reads a previously saved catalog, for offline use.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn name(&self) -> &str {
        "File"
    }

    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(path = %self.path.display(), "reading catalog");
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }
}
