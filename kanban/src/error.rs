//! Error taxonomy for board operations.
//!
//! Every variant is recoverable: callers report it and keep the board usable
//! with whatever state it had before the failed operation.

/// Failure of a board operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The request could not complete (transport error or unreadable body).
    #[error("network failure: {0}")]
    Network(String),
    /// The store answered with a non-success status code.
    #[error("server rejected request with status {status}")]
    Rejected { status: u16 },
    /// A draft failed client-side validation; no request was sent.
    #[error("invalid card: {0}")]
    Validation(#[from] ValidationError),
}

impl BoardError {
    /// Short label used in log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Rejected { .. } => "rejected",
            Self::Validation(_) => "validation",
        }
    }
}

/// Draft field rejected before any request is issued.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("unknown priority `{0}` (expected low, medium or high)")]
    InvalidPriority(String),
    #[error("unknown status `{0}` (expected todo, inprogress or done)")]
    InvalidStatus(String),
}
