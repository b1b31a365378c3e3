//! GitHub API implementation.

mod auth;
mod errors;
mod service;

pub use auth::{build_github_url, get_authenticated_client_builder};
pub use errors::GitHubError;
pub use service::GithubApiService;
