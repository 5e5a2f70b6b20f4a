//! Error taxonomy for the sync layer.
//!
//! Unreachable and NotFound are absorbed by the coordinator (logged, never
//! shown to the user) to keep the app working offline; Forbidden and
//! Validation must interrupt the user with an actionable message.

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("remote store unreachable")]
    Unreachable,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("only the donor can delete this listing")]
    Forbidden,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
