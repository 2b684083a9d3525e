use crate::error::PipelineError;
use crate::model::proposal::Proposal;
use crate::model::result_item::ResultItem;

pub const DEFAULT_ICON: &str = "icon.png";

pub fn proposal_item(proposal: &Proposal, icon: &str) -> ResultItem {
    let status = proposal.status.description();
    ResultItem {
        title: format!("{}: {}", proposal.id, proposal.title),
        subtitle: Some(format!("{status} • {}", proposal.title)),
        label: Some(proposal.id.clone()),
        badge: Some(status.to_string()),
        icon: Some(icon.to_string()),
        url: Some(proposal.url.clone()),
    }
}

/// The single item shown in place of results when the catalog is unusable.
pub fn error_item(err: PipelineError) -> ResultItem {
    let err = anyhow::Error::new(err);
    ResultItem {
        title: format!("Error: {err}"),
        subtitle: Some(format!("{err:#}")),
        label: None,
        badge: None,
        icon: None,
        url: None,
    }
}

/// Serialize items as a pretty JSON array with object keys in sorted order.
pub fn to_document(items: &[ResultItem]) -> Result<String, serde_json::Error> {
    // serde_json::Map is ordered by key, so a Value round trip sorts fields
    let value = serde_json::to_value(items)?;
    serde_json::to_string_pretty(&value)
}
