//! GitHub Api wrappers.

use async_trait::async_trait;
use phonehook_config::Config;
use phonehook_ghapi_github::GithubApiService;
use phonehook_ghapi_interface::{types::GhPullRequest, ApiService, Result};
use phonehook_models::PullRequestSpec;

use crate::metrics::GITHUB_API_CALLS;

/// GitHub Api Service with metrics.
pub struct MetricsApiService {
    inner: GithubApiService,
}

impl MetricsApiService {
    /// Creates a new service.
    pub fn new(config: Config) -> Self {
        Self {
            inner: GithubApiService::new(config),
        }
    }
}

#[async_trait]
impl ApiService for MetricsApiService {
    async fn pulls_create(
        &self,
        owner: &str,
        name: &str,
        spec: &PullRequestSpec,
    ) -> Result<GhPullRequest> {
        GITHUB_API_CALLS.inc();
        self.inner.pulls_create(owner, name, spec).await
    }
}
