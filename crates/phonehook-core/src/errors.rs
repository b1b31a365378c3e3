//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`phonehook_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: phonehook_ghapi_interface::ApiError,
    },

    /// Wraps [`phonehook_git_interface::GitError`].
    #[error("Git error: {source}")]
    GitError {
        source: phonehook_git_interface::GitError,
    },

    /// Wraps [`phonehook_upstream_interface::UpstreamError`].
    #[error("Upstream error: {source}")]
    UpstreamError {
        source: phonehook_upstream_interface::UpstreamError,
    },

    #[error("Invalid downstream repository: {source}")]
    RepositoryPathError {
        source: phonehook_models::RepositoryPathError,
    },

    #[error("Could not create temporary directory: {source}")]
    TempDirError { source: std::io::Error },

    #[error("Could not stage file '{}'", path)]
    StagingError {
        path: String,
        source: std::io::Error,
    },
}

impl From<phonehook_ghapi_interface::ApiError> for DomainError {
    fn from(e: phonehook_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<phonehook_git_interface::GitError> for DomainError {
    fn from(e: phonehook_git_interface::GitError) -> Self {
        Self::GitError { source: e }
    }
}

impl From<phonehook_upstream_interface::UpstreamError> for DomainError {
    fn from(e: phonehook_upstream_interface::UpstreamError) -> Self {
        Self::UpstreamError { source: e }
    }
}

impl From<phonehook_models::RepositoryPathError> for DomainError {
    fn from(e: phonehook_models::RepositoryPathError) -> Self {
        Self::RepositoryPathError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
