use std::path::{Path, PathBuf};

use async_trait::async_trait;
use phonehook_git_interface::{GitError, GitService, Result};
use phonehook_models::{CommitRequest, PushRequest};
use tracing::{debug, info};

use crate::{operations, Libgit2Error};

/// Git adapter running libgit2 on the blocking thread pool.
#[derive(Clone, Default)]
pub struct Libgit2GitService;

impl Libgit2GitService {
    /// Creates new git adapter.
    pub fn new() -> Self {
        Self
    }
}

async fn run_blocking<T, F>(task: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| GitError::from(Libgit2Error::TaskError { source: e }))?
}

#[async_trait]
impl GitService for Libgit2GitService {
    #[tracing::instrument(skip(self))]
    async fn clone_repository(
        &self,
        url: &str,
        branch: &str,
        depth: u32,
        directory: &Path,
    ) -> Result<()> {
        let (url, branch, directory) = (url.to_owned(), branch.to_owned(), directory.to_owned());
        run_blocking(move || operations::clone_repository(&url, &branch, depth, &directory))
            .await?;

        debug!("Repository cloned");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn checkout_new_branch(&self, directory: &Path, branch: &str) -> Result<()> {
        let (directory, branch): (PathBuf, String) = (directory.to_owned(), branch.to_owned());
        run_blocking(move || operations::checkout_new_branch(&directory, &branch)).await
    }

    #[tracing::instrument(skip(self), ret)]
    async fn commit_all(&self, directory: &Path, request: &CommitRequest) -> Result<String> {
        let (directory, request) = (directory.to_owned(), request.clone());
        let oid = run_blocking(move || operations::commit_all(&directory, &request)).await?;

        info!(commit = %oid, "Committed {oid}");
        Ok(oid)
    }

    #[tracing::instrument(skip(self))]
    async fn push_branch(&self, directory: &Path, request: &PushRequest) -> Result<()> {
        let (directory, request) = (directory.to_owned(), request.clone());
        run_blocking(move || operations::push_branch(&directory, &request)).await
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use git2::{build::RepoBuilder, Repository, RepositoryInitOptions, Signature};
    use phonehook_models::{GitAuthor, GitCredentials};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const BRANCH: &str = "support/update-libphonenumber-8-12-0";

    /// Creates a bare `origin` repository with one commit on `master`.
    fn arrange_origin(root: &Path) -> String {
        let seed_path = root.join("seed");
        let mut init_options = RepositoryInitOptions::new();
        init_options.initial_head("master");
        let seed = Repository::init_opts(&seed_path, &init_options).unwrap();

        std::fs::create_dir_all(seed_path.join("src")).unwrap();
        std::fs::write(seed_path.join("src/metadata.js"), "old").unwrap();
        std::fs::write(seed_path.join("README.md"), "readme").unwrap();

        let mut index = seed.index().unwrap();
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .unwrap();
        let tree = seed.find_tree(index.write_tree().unwrap()).unwrap();
        let signature = Signature::now("Seed", "seed@example.com").unwrap();
        seed.commit(Some("HEAD"), &signature, &signature, "Initial", &tree, &[])
            .unwrap();

        let origin_path = root.join("origin.git");
        RepoBuilder::new()
            .bare(true)
            .clone(seed_path.to_str().unwrap(), &origin_path)
            .unwrap();

        origin_path.to_str().unwrap().to_owned()
    }

    fn commit_request() -> CommitRequest {
        CommitRequest {
            branch: BRANCH.into(),
            message: "Update libphonenumber@8.12.0".into(),
            author: GitAuthor {
                name: "Rui Marinho".into(),
                email: "ruipmarinho@gmail.com".into(),
            },
        }
    }

    fn push_request() -> PushRequest {
        PushRequest {
            remote: "origin".into(),
            branch: BRANCH.into(),
            credentials: GitCredentials {
                username: "ruimarinho".into(),
                token: "token".into(),
            },
        }
    }

    #[tokio::test]
    async fn clone_commit_and_push() {
        let root = TempDir::new().unwrap();
        let origin = arrange_origin(root.path());
        let workdir = root.path().join("work");
        std::fs::create_dir(&workdir).unwrap();
        let service = Libgit2GitService::new();

        service
            .clone_repository(&origin, "master", 0, &workdir)
            .await
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(workdir.join("src/metadata.js")).unwrap(),
            "old"
        );

        service.checkout_new_branch(&workdir, BRANCH).await.unwrap();
        std::fs::write(workdir.join("src/metadata.js"), "new").unwrap();
        std::fs::write(workdir.join("src/asyoutypeformatter.js"), "added").unwrap();

        let oid = service
            .commit_all(&workdir, &commit_request())
            .await
            .unwrap();
        service
            .push_branch(&workdir, &push_request())
            .await
            .unwrap();

        let origin = Repository::open_bare(&origin).unwrap();
        let pushed = origin
            .find_reference(&format!("refs/heads/{BRANCH}"))
            .unwrap()
            .peel_to_commit()
            .unwrap();
        assert_eq!(pushed.id().to_string(), oid);
        assert_eq!(pushed.message(), Some("Update libphonenumber@8.12.0"));
        assert_eq!(pushed.author().name(), Some("Rui Marinho"));
        assert_eq!(pushed.author().email(), Some("ruipmarinho@gmail.com"));
        assert_eq!(pushed.parent_count(), 1);

        let tree = pushed.tree().unwrap();
        assert!(tree.get_path(Path::new("src/asyoutypeformatter.js")).is_ok());
        assert!(tree.get_path(Path::new("README.md")).is_ok());

        // master is untouched.
        let master = origin
            .find_reference("refs/heads/master")
            .unwrap()
            .peel_to_commit()
            .unwrap();
        assert_eq!(master.message(), Some("Initial"));
    }

    #[tokio::test]
    async fn checkout_new_branch_overwrites_existing_branch() {
        let root = TempDir::new().unwrap();
        let origin = arrange_origin(root.path());
        let workdir = root.path().join("work");
        std::fs::create_dir(&workdir).unwrap();
        let service = Libgit2GitService::new();

        service
            .clone_repository(&origin, "master", 0, &workdir)
            .await
            .unwrap();
        service.checkout_new_branch(&workdir, BRANCH).await.unwrap();
        std::fs::write(workdir.join("src/metadata.js"), "new").unwrap();
        let first = service
            .commit_all(&workdir, &commit_request())
            .await
            .unwrap();

        // Checked out again from master: the previous commit is dropped.
        let repository = Repository::open(&workdir).unwrap();
        let master = repository
            .find_branch("master", git2::BranchType::Local)
            .unwrap()
            .get()
            .peel_to_commit()
            .unwrap();
        repository
            .checkout_tree(
                master.as_object(),
                Some(git2::build::CheckoutBuilder::new().force()),
            )
            .unwrap();
        repository.set_head("refs/heads/master").unwrap();

        service.checkout_new_branch(&workdir, BRANCH).await.unwrap();
        let tip = repository.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(repository.head().unwrap().shorthand(), Some(BRANCH));
        assert_eq!(tip.id(), master.id());
        assert_ne!(tip.id().to_string(), first);
        assert_eq!(
            std::fs::read_to_string(workdir.join("src/metadata.js")).unwrap(),
            "old"
        );

        // Re-created while it is the current HEAD.
        service.checkout_new_branch(&workdir, BRANCH).await.unwrap();
        assert_eq!(repository.head().unwrap().shorthand(), Some(BRANCH));
    }

    #[tokio::test]
    async fn commit_without_changes() {
        let root = TempDir::new().unwrap();
        let origin = arrange_origin(root.path());
        let workdir = root.path().join("work");
        std::fs::create_dir(&workdir).unwrap();
        let service = Libgit2GitService::new();

        service
            .clone_repository(&origin, "master", 0, &workdir)
            .await
            .unwrap();
        service.checkout_new_branch(&workdir, BRANCH).await.unwrap();

        assert!(matches!(
            service.commit_all(&workdir, &commit_request()).await,
            Err(GitError::NothingToCommit { branch }) if branch == BRANCH
        ));
    }

    #[tokio::test]
    async fn clone_unknown_repository() {
        let root = TempDir::new().unwrap();
        let workdir = root.path().join("work");
        std::fs::create_dir(&workdir).unwrap();

        let missing = root.path().join("missing.git");
        assert!(Libgit2GitService::new()
            .clone_repository(missing.to_str().unwrap(), "master", 0, &workdir)
            .await
            .is_err());
    }
}
