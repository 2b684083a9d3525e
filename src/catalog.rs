use crate::error::DecodeError;
use crate::model::proposal::{Proposal, RawProposal};

/// Decode the raw catalog feed. Either every record decodes or the whole
/// payload is rejected; record order is preserved.
pub fn decode(bytes: &[u8], base_url: &str) -> Result<Vec<Proposal>, DecodeError> {
    let records: Vec<RawProposal> = serde_json::from_slice(bytes)?;

    let proposals: Vec<Proposal> = records
        .into_iter()
        .map(|raw| Proposal::from_raw(raw, base_url))
        .collect();

    for p in proposals.iter().filter(|p| p.status.is_unknown()) {
        tracing::debug!(id = %p.id, code = p.status.feed_code(), "unrecognised status");
    }
    tracing::debug!(count = proposals.len(), "decoded catalog");

    Ok(proposals)
}
