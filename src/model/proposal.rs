use serde::Deserialize;

use super::status::Status;

/// One record of the catalog feed, exactly as published.
#[derive(Debug, Deserialize)]
pub struct RawProposal {
    pub id: String,
    pub title: String,
    pub link: String,
    pub status: RawStatus,
}

#[derive(Debug, Deserialize)]
pub struct RawStatus {
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub id: String,
    pub title: String,
    pub url: String,
    pub status: Status,
    /// Trailing number of the identifier, e.g. 401 for `SE-0401`.
    pub number: Option<u64>,
}

impl Proposal {
    pub fn from_raw(raw: RawProposal, base_url: &str) -> Self {
        let number = parse_number(&raw.id);
        Self {
            title: raw.title.trim().to_string(),
            url: join_url(base_url, &raw.link),
            status: Status::from_feed_code(&raw.status.state),
            number,
            id: raw.id,
        }
    }
}

/// Parse the final `-` separated segment of an identifier as a number.
pub fn parse_number(id: &str) -> Option<u64> {
    id.rsplit('-').next().and_then(parse_digits)
}

/// Digits only: signs and whitespace are not part of a proposal number.
pub fn parse_digits(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn join_url(base: &str, link: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        link.trim_start_matches('/')
    )
}
