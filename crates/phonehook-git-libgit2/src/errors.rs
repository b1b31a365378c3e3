use phonehook_git_interface::GitError;
use thiserror::Error;

/// libgit2 adapter error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum Libgit2Error {
    #[error("Could not clone '{}' at branch '{}'", url, branch)]
    CloneError {
        url: String,
        branch: String,
        source: git2::Error,
    },

    #[error("Could not open repository at '{}'", path)]
    OpenError { path: String, source: git2::Error },

    #[error("Could not check out branch '{}'", branch)]
    CheckoutError { branch: String, source: git2::Error },

    #[error("Could not commit on branch '{}'", branch)]
    CommitError { branch: String, source: git2::Error },

    #[error("Could not push branch '{}' to remote '{}'", branch, remote)]
    PushError {
        branch: String,
        remote: String,
        source: git2::Error,
    },

    #[error("Blocking git task failed")]
    TaskError { source: tokio::task::JoinError },
}

impl From<Libgit2Error> for GitError {
    fn from(e: Libgit2Error) -> Self {
        Self::ImplementationError { source: e.into() }
    }
}
