use thiserror::Error;

/// Caller-contract violations detected by the pure core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown job id {0:?}")]
    UnknownJob(String),
}
