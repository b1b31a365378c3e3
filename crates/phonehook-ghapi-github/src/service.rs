//! GitHub adapter

use async_trait::async_trait;
use phonehook_config::Config;
use phonehook_ghapi_interface::{types::GhPullRequest, ApiError, ApiService, Result};
use phonehook_models::PullRequestSpec;
use reqwest::Client;

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        Ok(get_authenticated_client_builder(&self.config)?.build()?)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    async fn create_pull_request(
        &self,
        owner: &str,
        name: &str,
        spec: &PullRequestSpec,
    ) -> Result<GhPullRequest, GitHubError> {
        Ok(self
            .get_client()?
            .post(self.build_url(format!("/repos/{owner}/{name}/pulls")))
            .json(spec)
            .send()
            .await?
            .error_for_status()?
            .json::<GhPullRequest>()
            .await?)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn pulls_create(
        &self,
        owner: &str,
        name: &str,
        spec: &PullRequestSpec,
    ) -> Result<GhPullRequest> {
        self.create_pull_request(owner, name, spec)
            .await
            .map_err(|e| ApiError::PullRequestCreationError {
                head: spec.head.clone(),
                base: spec.base.clone(),
                repository_path: format!("{owner}/{name}"),
                source: e.into(),
            })
    }
}
