use thiserror::Error;

/// Errors reported before a simulation starts or while reading the journal.
///
/// A run either produces a full valid trajectory or fails here; there is no
/// partial or resumable state.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("invalid simulator configuration: {0}")]
    InvalidConfig(String),

    #[error("journal io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("journal decode error: {0}")]
    Json(#[from] serde_json::Error),
}
