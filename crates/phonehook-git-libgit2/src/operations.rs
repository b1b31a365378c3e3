//! Blocking libgit2 operations.

use std::{cell::Cell, path::Path};

use git2::{
    build::{CheckoutBuilder, RepoBuilder},
    BranchType, Cred, FetchOptions, IndexAddOption, PushOptions, RemoteCallbacks, Repository,
    Signature,
};
use phonehook_git_interface::GitError;
use phonehook_models::{CommitRequest, PushRequest};

use crate::Libgit2Error;

fn open(directory: &Path) -> Result<Repository, Libgit2Error> {
    Repository::open(directory).map_err(|e| Libgit2Error::OpenError {
        path: directory.display().to_string(),
        source: e,
    })
}

pub(crate) fn clone_repository(
    url: &str,
    branch: &str,
    depth: u32,
    directory: &Path,
) -> Result<(), GitError> {
    let mut fetch_options = FetchOptions::new();
    if depth > 0 {
        fetch_options.depth(depth as i32);
    }

    RepoBuilder::new()
        .branch(branch)
        .fetch_options(fetch_options)
        .clone(url, directory)
        .map_err(|e| Libgit2Error::CloneError {
            url: url.into(),
            branch: branch.into(),
            source: e,
        })?;

    Ok(())
}

pub(crate) fn checkout_new_branch(directory: &Path, branch: &str) -> Result<(), GitError> {
    let repository = open(directory)?;
    let map_err = |e| Libgit2Error::CheckoutError {
        branch: branch.into(),
        source: e,
    };

    let head = repository
        .head()
        .and_then(|h| h.peel_to_commit())
        .map_err(map_err)?;
    // A branch cannot be force-updated while it is the current HEAD.
    repository.set_head_detached(head.id()).map_err(map_err)?;
    let created = repository.branch(branch, &head, true).map_err(map_err)?;
    let reference = created
        .get()
        .name()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("refs/heads/{branch}"));

    repository
        .checkout_tree(head.as_object(), Some(CheckoutBuilder::new().force()))
        .map_err(map_err)?;
    repository.set_head(&reference).map_err(map_err)?;

    Ok(())
}

pub(crate) fn commit_all(directory: &Path, request: &CommitRequest) -> Result<String, GitError> {
    let repository = open(directory)?;
    let map_err = |e| Libgit2Error::CommitError {
        branch: request.branch.clone(),
        source: e,
    };

    let parent = repository
        .find_branch(&request.branch, BranchType::Local)
        .and_then(|b| b.get().peel_to_commit())
        .map_err(map_err)?;

    let mut index = repository.index().map_err(map_err)?;
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .map_err(map_err)?;
    index.update_all(["*"].iter(), None).map_err(map_err)?;
    index.write().map_err(map_err)?;
    let tree_id = index.write_tree().map_err(map_err)?;

    if tree_id == parent.tree_id() {
        return Err(GitError::NothingToCommit {
            branch: request.branch.clone(),
        });
    }

    let tree = repository.find_tree(tree_id).map_err(map_err)?;
    let signature =
        Signature::now(&request.author.name, &request.author.email).map_err(map_err)?;
    let oid = repository
        .commit(
            Some(&format!("refs/heads/{}", request.branch)),
            &signature,
            &signature,
            &request.message,
            &tree,
            &[&parent],
        )
        .map_err(map_err)?;

    Ok(oid.to_string())
}

pub(crate) fn push_branch(directory: &Path, request: &PushRequest) -> Result<(), GitError> {
    let repository = open(directory)?;
    let map_err = |e| Libgit2Error::PushError {
        branch: request.branch.clone(),
        remote: request.remote.clone(),
        source: e,
    };

    let mut remote = repository.find_remote(&request.remote).map_err(map_err)?;
    let mut rejections: Vec<String> = Vec::new();

    {
        let attempts = Cell::new(0);
        let mut callbacks = RemoteCallbacks::new();
        callbacks.credentials(|_url, _username, _allowed| {
            // libgit2 asks again after a refused attempt.
            attempts.set(attempts.get() + 1);
            if attempts.get() > 1 {
                return Err(git2::Error::from_str("credentials were rejected"));
            }

            Cred::userpass_plaintext(&request.credentials.username, &request.credentials.token)
        });
        callbacks.push_update_reference(|reference, status| {
            if let Some(message) = status {
                rejections.push(format!("{reference}: {message}"));
            }
            Ok(())
        });

        let mut options = PushOptions::new();
        options.remote_callbacks(callbacks);
        remote
            .push(&[request.refspec()], Some(&mut options))
            .map_err(map_err)?;
    }

    if !rejections.is_empty() {
        return Err(GitError::PushRejected {
            branch: request.branch.clone(),
            reason: rejections.join(", "),
        });
    }

    Ok(())
}
