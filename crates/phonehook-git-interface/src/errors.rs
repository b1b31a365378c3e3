//! Git errors.

use thiserror::Error;

/// Git error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum GitError {
    /// The working tree has no change to commit.
    #[error("Nothing to commit on branch '{}'", branch)]
    NothingToCommit { branch: String },

    /// The remote refused a reference update.
    #[error("Push of branch '{}' was rejected: {}", branch, reason)]
    PushRejected { branch: String, reason: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `GitError`.
pub type Result<T, E = GitError> = core::result::Result<T, E>;
