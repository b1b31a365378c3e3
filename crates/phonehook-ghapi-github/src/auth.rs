//! Auth.

use std::time::Duration;

use http::{header, HeaderMap};
use phonehook_config::Config;
use reqwest::ClientBuilder;

use crate::errors::GitHubError;

const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";

/// Get an authenticated GitHub client builder.
///
/// The token is sent as a bearer token on every request.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let mut headers = default_headers();
    if !config.api.github.token.is_empty() {
        let mut value =
            header::HeaderValue::from_str(&format!("Bearer {}", config.api.github.token))
                .map_err(|e| GitHubError::InvalidHeaderError { source: e })?;
        value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, value);
    }

    Ok(base_client_builder(config).default_headers(headers))
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!("{}{}", config.api.github.root_url, path.into())
}

fn base_client_builder(config: &Config) -> ClientBuilder {
    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("phonehook/{}", config.version))
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static(GITHUB_ACCEPT_HEADER),
    );
    headers
}
