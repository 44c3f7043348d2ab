use thiserror::Error;

/// Error taxonomy shared by every domain operation. Each variant maps to a
/// distinct failure surfaced at the API boundary; none of them should ever
/// crash the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("food item is no longer available")]
    ItemUnavailable,

    #[error("offered item is no longer available")]
    OfferedItemUnavailable,

    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("swap is not completed")]
    NotCompleted,

    #[error("this side of the swap has already been reviewed")]
    AlreadyReviewed,

    #[error("{0}")]
    Validation(String),

    #[error("internal server error")]
    InternalServerError,
}
