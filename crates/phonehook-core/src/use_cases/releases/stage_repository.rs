use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shaku::{Component, Interface};
use tempfile::TempDir;
use tracing::{debug, info};

use crate::{CoreContext, DomainError, Result};

/// Working copy of the downstream repository, removed on drop.
#[derive(Debug)]
pub struct StagingArea {
    directory: TempDir,
    branch: String,
}

impl StagingArea {
    pub fn path(&self) -> &Path {
        self.directory.path()
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }
}

/// Clone the downstream repository on a new branch and copy the fetched files into it.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait StageRepositoryInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        branch: &str,
        source: &Path,
        files: &[String],
    ) -> Result<StagingArea>;
}

#[derive(Component)]
#[shaku(interface = StageRepositoryInterface)]
pub(crate) struct StageRepository;

impl StageRepository {
    async fn copy_files(source: &Path, target: &Path, files: &[String]) -> Result<()> {
        let map_err = |path: &Path, e| DomainError::StagingError {
            path: path.display().to_string(),
            source: e,
        };

        tokio::fs::create_dir_all(target)
            .await
            .map_err(|e| map_err(target, e))?;

        for file in files {
            let destination: PathBuf = target.join(file);
            debug!(file = %file, "Copying {file}");
            tokio::fs::copy(source.join(file), &destination)
                .await
                .map_err(|e| map_err(&destination, e))?;
        }

        Ok(())
    }
}

#[async_trait]
impl StageRepositoryInterface for StageRepository {
    #[tracing::instrument(skip(self, ctx, source, files), fields(files = files.len()))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        branch: &str,
        source: &Path,
        files: &[String],
    ) -> Result<StagingArea> {
        let downstream = &ctx.config.downstream;
        let directory = TempDir::new().map_err(|e| DomainError::TempDirError { source: e })?;
        let clone_url = downstream.effective_clone_url();

        info!(url = %clone_url, "Cloning {} at {}", clone_url, downstream.base_branch);
        ctx.git_service
            .clone_repository(
                &clone_url,
                &downstream.base_branch,
                downstream.clone_depth,
                directory.path(),
            )
            .await?;

        ctx.git_service
            .checkout_new_branch(directory.path(), branch)
            .await?;

        Self::copy_files(
            source,
            &directory.path().join(&downstream.target_directory),
            files,
        )
        .await?;

        Ok(StagingArea {
            directory,
            branch: branch.into(),
        })
    }
}
