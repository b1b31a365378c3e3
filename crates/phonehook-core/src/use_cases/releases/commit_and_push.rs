use std::path::Path;

use async_trait::async_trait;
use phonehook_models::{CommitRequest, GitAuthor, GitCredentials, PushRequest};
use shaku::{Component, Interface};
use tracing::{info, warn};

use crate::{CommitResult, CoreContext, ReleaseNames, Result};

const REMOTE_NAME: &str = "origin";

/// Commit every staged change, then push the branch unless running dry.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CommitAndPushInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        directory: &Path,
        names: &ReleaseNames,
    ) -> Result<CommitResult>;
}

#[derive(Component)]
#[shaku(interface = CommitAndPushInterface)]
pub(crate) struct CommitAndPush;

#[async_trait]
impl CommitAndPushInterface for CommitAndPush {
    #[tracing::instrument(skip(self, ctx, names), fields(branch = %names.branch))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        directory: &Path,
        names: &ReleaseNames,
    ) -> Result<CommitResult> {
        let commit = ctx
            .git_service
            .commit_all(
                directory,
                &CommitRequest {
                    branch: names.branch.clone(),
                    message: names.commit_message.clone(),
                    author: GitAuthor {
                        name: ctx.config.commit.author_name.clone(),
                        email: ctx.config.commit.author_email.clone(),
                    },
                },
            )
            .await?;

        if ctx.config.dry_run {
            warn!("Skipping commit push");
            return Ok(CommitResult {
                commit,
                pushed: false,
            });
        }

        info!("Pushing {} to {}", names.branch, REMOTE_NAME);
        ctx.git_service
            .push_branch(
                directory,
                &PushRequest {
                    remote: REMOTE_NAME.into(),
                    branch: names.branch.clone(),
                    credentials: GitCredentials {
                        username: ctx.config.downstream.effective_push_username(),
                        token: ctx.config.api.github.token.clone(),
                    },
                },
            )
            .await?;

        Ok(CommitResult {
            commit,
            pushed: true,
        })
    }
}
