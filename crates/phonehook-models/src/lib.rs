mod git;
mod pull_request_spec;
mod release_version;
mod repository_path;

pub use git::{CommitRequest, GitAuthor, GitCredentials, PushRequest};
pub use pull_request_spec::PullRequestSpec;
pub use release_version::{ReleaseVersion, TAG_NAMESPACE, TAG_PREFIX};
pub use repository_path::{RepositoryPath, RepositoryPathError};
