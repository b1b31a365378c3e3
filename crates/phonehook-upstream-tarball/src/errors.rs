use phonehook_upstream_interface::UpstreamError;
use thiserror::Error;

/// Tarball adapter error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum TarballError {
    #[error("HTTP error")]
    HttpError { source: reqwest::Error },

    #[error("Could not extract archive")]
    ArchiveError { source: std::io::Error },

    #[error("Blocking extraction task failed")]
    TaskError { source: tokio::task::JoinError },
}

impl From<reqwest::Error> for TarballError {
    fn from(e: reqwest::Error) -> Self {
        Self::HttpError { source: e }
    }
}

impl From<TarballError> for UpstreamError {
    fn from(e: TarballError) -> Self {
        Self::ImplementationError { source: e.into() }
    }
}
