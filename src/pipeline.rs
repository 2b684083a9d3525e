use crate::catalog;
use crate::error::{FetchError, PipelineError};
use crate::format;
use crate::matcher;
use crate::model::result_item::ResultItem;

/// Settings the pipeline needs beyond the query and the feed.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub icon: String,
}

/// Turn a fetched feed and a query into the items to display.
///
/// Failures never escape: a fetch or decode error becomes one diagnostic item.
pub fn run(query: &str, feed: Result<Vec<u8>, FetchError>, settings: &Settings) -> Vec<ResultItem> {
    match search(query, feed, settings) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, "showing error item");
            vec![format::error_item(err)]
        }
    }
}

fn search(
    query: &str,
    feed: Result<Vec<u8>, FetchError>,
    settings: &Settings,
) -> Result<Vec<ResultItem>, PipelineError> {
    let bytes = feed?;
    let proposals = catalog::decode(&bytes, &settings.base_url)?;
    let matched = matcher::filter(query, proposals);
    Ok(matched
        .iter()
        .map(|p| format::proposal_item(p, &settings.icon))
        .collect())
}

/// Full pipeline down to the serialized document.
pub fn render(
    query: &str,
    feed: Result<Vec<u8>, FetchError>,
    settings: &Settings,
) -> Result<String, serde_json::Error> {
    format::to_document(&run(query, feed, settings))
}
