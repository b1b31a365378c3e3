use std::path::Path;

use async_trait::async_trait;
use phonehook_models::{CommitRequest, PushRequest};

use crate::Result;

/// Git operations on a local working copy.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GitService: Send + Sync {
    /// Clone a repository at a branch into an existing empty directory.
    ///
    /// A `depth` of 0 clones the full history.
    async fn clone_repository(
        &self,
        url: &str,
        branch: &str,
        depth: u32,
        directory: &Path,
    ) -> Result<()>;
    /// Create a branch from HEAD and check it out, overwriting any local branch with the same name.
    async fn checkout_new_branch(&self, directory: &Path, branch: &str) -> Result<()>;
    /// Stage every working tree change and commit it. Returns the commit id.
    async fn commit_all(&self, directory: &Path, request: &CommitRequest) -> Result<String>;
    /// Push a local branch to the same-named remote branch, without force.
    async fn push_branch(&self, directory: &Path, request: &PushRequest) -> Result<()>;
}
