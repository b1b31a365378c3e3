use async_trait::async_trait;
use phonehook_ghapi_interface::types::GhPullRequest;
use phonehook_models::{PullRequestSpec, RepositoryPath};
use shaku::{Component, Interface};
use tracing::info;

use crate::{CoreContext, ReleaseNames, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait OpenPullRequestInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, names: &ReleaseNames)
        -> Result<GhPullRequest>;
}

#[derive(Component)]
#[shaku(interface = OpenPullRequestInterface)]
pub(crate) struct OpenPullRequest;

#[async_trait]
impl OpenPullRequestInterface for OpenPullRequest {
    #[tracing::instrument(skip(self, ctx, names), fields(head = %names.branch, base = %names.base_branch))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        names: &ReleaseNames,
    ) -> Result<GhPullRequest> {
        let repository_path = RepositoryPath::new(&ctx.config.downstream.repository)?;
        let pull_request = ctx
            .api_service
            .pulls_create(
                repository_path.owner(),
                repository_path.name(),
                &PullRequestSpec {
                    title: names.pull_request_title.clone(),
                    head: names.branch.clone(),
                    base: names.base_branch.clone(),
                    body: names.pull_request_body.clone(),
                },
            )
            .await?;

        info!(
            "Pull request #{} opened ({})",
            pull_request.number, pull_request.html_url
        );
        Ok(pull_request)
    }
}

#[cfg(test)]
mod tests {
    use phonehook_ghapi_interface::ApiError;
    use phonehook_models::ReleaseVersion;

    use super::*;
    use crate::{context::tests::CoreContextTest, DomainError};

    #[tokio::test]
    async fn run() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_pulls_create()
            .once()
            .withf(|owner, name, spec| {
                owner == "ruimarinho"
                    && name == "google-libphonenumber"
                    && spec.head == "support/update-libphonenumber-8-12-0"
                    && spec.base == "master"
            })
            .return_once(|_, _, _| {
                Ok(GhPullRequest {
                    number: 7,
                    html_url: "https://github.com/ruimarinho/google-libphonenumber/pull/7".into(),
                    ..Default::default()
                })
            });

        let names = ReleaseNames::new(&ctx.config, &ReleaseVersion::new("8.12.0"));
        let pull_request = OpenPullRequest
            .run(&ctx.as_context(), &names)
            .await
            .unwrap();

        assert_eq!(pull_request.number, 7);
    }

    #[tokio::test]
    async fn run_existing_pull_request() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_pulls_create()
            .once()
            .return_once(|owner, name, spec| {
                Err(ApiError::PullRequestCreationError {
                    head: spec.head.clone(),
                    base: spec.base.clone(),
                    repository_path: format!("{owner}/{name}"),
                    source: "A pull request already exists".into(),
                })
            });

        let names = ReleaseNames::new(&ctx.config, &ReleaseVersion::new("8.12.0"));
        assert!(matches!(
            OpenPullRequest.run(&ctx.as_context(), &names).await,
            Err(DomainError::ApiError { .. })
        ));
    }

    #[tokio::test]
    async fn run_invalid_repository() {
        let mut ctx = CoreContextTest::new();
        ctx.config.downstream.repository = "invalid".into();
        ctx.api_service.expect_pulls_create().never();

        let names = ReleaseNames::new(&ctx.config, &ReleaseVersion::new("8.12.0"));
        assert!(matches!(
            OpenPullRequest.run(&ctx.as_context(), &names).await,
            Err(DomainError::RepositoryPathError { .. })
        ));
    }
}
