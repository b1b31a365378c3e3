//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Pull request creation error.
    #[error(
        "Could not create pull request from '{}' to '{}' on repository {}",
        head,
        base,
        repository_path
    )]
    PullRequestCreationError {
        head: String,
        base: String,
        repository_path: String,
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
