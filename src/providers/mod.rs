pub mod file;
pub mod http;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::FetchError;

/// Somewhere the raw catalog bytes come from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self) -> Result<Vec<u8>, FetchError>;
}


/// A configured local file wins over the network feed.
pub fn create_source(config: &AppConfig) -> Box<dyn CatalogSource> {
    match &config.feed_path {
        Some(path) => Box::new(file::FileSource::new(path.clone())),
        None => Box::new(http::HttpSource::new(config.feed_url().to_string())),
    }
}
