use std::cmp::Reverse;

use crate::model::proposal::{parse_digits, Proposal};

/// Filter proposals against a query and order them newest first.
///
/// An empty query keeps everything. A single numeric token selects the
/// proposal with that number. Anything else requires every token to occur in
/// the proposal's searchable text.
pub fn filter(query: &str, proposals: Vec<Proposal>) -> Vec<Proposal> {
    let tokens = tokenize(query);

    let exact = match tokens.as_slice() {
        [single] => parse_digits(single),
        _ => None,
    };

    let mut matched: Vec<Proposal> = match (tokens.is_empty(), exact) {
        (true, _) => proposals,
        (false, Some(wanted)) => proposals
            .into_iter()
            .filter(|p| p.number == Some(wanted))
            .collect(),
        (false, None) => proposals
            .into_iter()
            .filter(|p| {
                let text = searchable_text(p);
                tokens.iter().all(|t| text.contains(t.as_str()))
            })
            .collect(),
    };

    // stable: proposals without a number keep their feed order at the end
    matched.sort_by_key(|p| Reverse(p.number.unwrap_or(0)));

    tracing::debug!(tokens = tokens.len(), matched = matched.len(), "filtered catalog");
    matched
}

pub fn tokenize(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Lowercased text searched by multi-word queries. The status description is
/// repeated to match the reference catalog search.
pub fn searchable_text(proposal: &Proposal) -> String {
    let status = proposal.status.description();
    let mut parts: Vec<String> = vec![proposal.id.clone()];
    if let Some(number) = proposal.number {
        parts.push(number.to_string());
    }
    parts.push(proposal.title.clone());
    parts.push(status.to_string());
    parts.push(status.to_string());
    parts.join(" ").to_lowercase()
}
