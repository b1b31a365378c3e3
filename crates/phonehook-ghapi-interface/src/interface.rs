use async_trait::async_trait;
use phonehook_models::PullRequestSpec;

use crate::{types::GhPullRequest, Result};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Create a pull request on a repository.
    async fn pulls_create(
        &self,
        owner: &str,
        name: &str,
        spec: &PullRequestSpec,
    ) -> Result<GhPullRequest>;
}
