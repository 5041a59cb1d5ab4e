use thiserror::Error;

/// Failure classes surfaced by the orchestration workflows.
///
/// A skipped workflow (for example a restaurant fetch with an incomplete
/// selection) is not a failure and is reported as `Ok(false)` by the
/// workflow itself, never as one of these.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("authorization required: {0}")]
    Unauthorized(String),
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("session storage failure: {0}")]
    Storage(String),
}

impl ClientError {
    pub(crate) fn storage(err: anyhow::Error) -> Self {
        Self::Storage(format!("{err:#}"))
    }
}
