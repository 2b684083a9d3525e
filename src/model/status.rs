use std::fmt;

/// Review state of a proposal as published in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    AwaitingReview,
    ScheduledForReview,
    ActiveReview,
    ReturnedForRevision,
    Withdrawn,
    Deferred,
    Accepted,
    AcceptedWithRevisions,
    Rejected,
    Implemented,
    Previewing,
    Error,
    /// A feed state this build does not know about, kept verbatim.
    Unknown(String),
}

impl Status {
    /// Map a feed state such as `.activeReview` to a status. Never fails.
    pub fn from_feed_code(code: &str) -> Self {
        match code {
            ".awaitingReview" => Status::AwaitingReview,
            ".scheduledForReview" => Status::ScheduledForReview,
            ".activeReview" => Status::ActiveReview,
            ".returnedForRevision" => Status::ReturnedForRevision,
            ".withdrawn" => Status::Withdrawn,
            ".deferred" => Status::Deferred,
            ".accepted" => Status::Accepted,
            ".acceptedWithRevisions" => Status::AcceptedWithRevisions,
            ".rejected" => Status::Rejected,
            ".implemented" => Status::Implemented,
            ".previewing" => Status::Previewing,
            ".error" => Status::Error,
            other => Status::Unknown(other.to_string()),
        }
    }

    pub fn feed_code(&self) -> &str {
        match self {
            Status::AwaitingReview => ".awaitingReview",
            Status::ScheduledForReview => ".scheduledForReview",
            Status::ActiveReview => ".activeReview",
            Status::ReturnedForRevision => ".returnedForRevision",
            Status::Withdrawn => ".withdrawn",
            Status::Deferred => ".deferred",
            Status::Accepted => ".accepted",
            Status::AcceptedWithRevisions => ".acceptedWithRevisions",
            Status::Rejected => ".rejected",
            Status::Implemented => ".implemented",
            Status::Previewing => ".previewing",
            Status::Error => ".error",
            Status::Unknown(raw) => raw,
        }
    }

    /// Human-readable label shown in results and used for text search.
    ///
    /// Unknown states fall back to the raw feed code without its leading dot.
    pub fn description(&self) -> &str {
        match self {
            Status::AwaitingReview => "Awaiting Review",
            Status::ScheduledForReview => "Scheduled for Review",
            Status::ActiveReview => "Active Review",
            Status::ReturnedForRevision => "Returned for Revision",
            Status::Withdrawn => "Withdrawn",
            Status::Deferred => "Deferred",
            Status::Accepted => "Accepted",
            Status::AcceptedWithRevisions => "Accepted with Revisions",
            Status::Rejected => "Rejected",
            Status::Implemented => "Implemented",
            Status::Previewing => "Previewing",
            Status::Error => "Error",
            Status::Unknown(raw) => raw.trim_start_matches('.'),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Status::Unknown(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
