use async_trait::async_trait;
use phonehook_models::ReleaseVersion;
use shaku::{Component, HasComponent, Interface};
use tempfile::TempDir;
use tracing::warn;

use super::{
    CommitAndPushInterface, FetchUpstreamReleaseInterface, OpenPullRequestInterface,
    StageRepositoryInterface,
};
use crate::{CoreContext, DomainError, PipelineOutcome, ReleaseNames, Result};

/// Run the whole update for a release: fetch, stage, commit, push and open the pull request.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait UpdateReleaseInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        version: &ReleaseVersion,
    ) -> Result<PipelineOutcome>;
}

#[derive(Component)]
#[shaku(interface = UpdateReleaseInterface)]
pub(crate) struct UpdateRelease;

#[async_trait]
impl UpdateReleaseInterface for UpdateRelease {
    #[tracing::instrument(skip_all, fields(version = %version))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        version: &ReleaseVersion,
    ) -> Result<PipelineOutcome> {
        let names = ReleaseNames::new(ctx.config, version);

        let fetch_upstream_release: &dyn FetchUpstreamReleaseInterface =
            ctx.core_module.resolve_ref();
        let fetched = TempDir::new().map_err(|e| DomainError::TempDirError { source: e })?;
        let files = fetch_upstream_release
            .run(ctx, version, fetched.path())
            .await?;

        let stage_repository: &dyn StageRepositoryInterface = ctx.core_module.resolve_ref();
        let staging = stage_repository
            .run(ctx, &names.branch, fetched.path(), &files)
            .await?;

        let commit_and_push: &dyn CommitAndPushInterface = ctx.core_module.resolve_ref();
        let commit = commit_and_push.run(ctx, staging.path(), &names).await?;

        if !commit.pushed {
            warn!("Skipping pull request creation");
            return Ok(PipelineOutcome::Committed {
                version: version.clone(),
                branch: names.branch,
                commit: commit.commit,
            });
        }

        let open_pull_request: &dyn OpenPullRequestInterface = ctx.core_module.resolve_ref();
        let pull_request = open_pull_request.run(ctx, &names).await?;

        Ok(PipelineOutcome::Opened {
            version: version.clone(),
            branch: names.branch,
            commit: commit.commit,
            pull_request_number: pull_request.number,
            pull_request_url: pull_request.html_url,
        })
    }
}
