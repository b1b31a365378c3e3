use thiserror::Error;

/// Upstream error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Unexpected status {} when downloading '{}'", status, url)]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Download of '{}' did not complete within {}ms", url, timeout)]
    Timeout { url: String, timeout: u64 },

    #[error("Download of '{}' exceeds {} bytes", url, limit)]
    TooLarge { url: String, limit: u64 },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `UpstreamError`.
pub type Result<T, E = UpstreamError> = core::result::Result<T, E>;
