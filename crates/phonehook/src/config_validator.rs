//! Validation utilities.

use std::net::IpAddr;

use phonehook_config::{Config, VERSION_PLACEHOLDER};
use phonehook_models::RepositoryPath;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push_str(&format!("\n  - Missing env. var.: {}", name));
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        error.push_str(&format!("\n  - Invalid env. var.: {} ({})", name, reason));
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.parse::<IpAddr>().is_err() {
        _invalid(&mut error, "HOOK_SERVER_BIND_IP", "not an IP address");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "HOOK_SERVER_BIND_PORT");
    }

    // Pushes and pull requests need a token
    if !config.dry_run && config.api.github.token.is_empty() {
        _missing(&mut error, "HOOK_API_GITHUB_TOKEN");
    }

    if RepositoryPath::new(&config.downstream.repository).is_err() {
        _invalid(&mut error, "HOOK_DOWNSTREAM_REPOSITORY", "expected owner/name");
    }

    for (name, template) in [
        (
            "HOOK_DOWNSTREAM_BRANCH_TEMPLATE",
            &config.downstream.branch_template,
        ),
        (
            "HOOK_UPSTREAM_ARCHIVE_URL_TEMPLATE",
            &config.upstream.archive_url_template,
        ),
        (
            "HOOK_COMMIT_MESSAGE_TEMPLATE",
            &config.commit.message_template,
        ),
        (
            "HOOK_PULL_REQUEST_BODY_TEMPLATE",
            &config.pull_request.body_template,
        ),
    ] {
        if !template.contains(VERSION_PLACEHOLDER) {
            _invalid(&mut error, name, "missing {version} placeholder");
        }
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn arrange_config() -> Config {
        let mut config = Config::from_env_no_version();
        config.api.github.token = "abcdef".into();
        config.server.bind_ip = "127.0.0.1".into();
        config.server.bind_port = 8008;
        config
    }

    fn errors(config: &Config) -> String {
        match validate_configuration(config) {
            Err(ValidationError::EnvVarsError { errors }) => errors,
            Ok(()) => String::new(),
        }
    }

    #[test]
    fn valid_configuration() {
        assert!(validate_configuration(&arrange_config()).is_ok());
    }

    #[test]
    fn missing_token() {
        let mut config = arrange_config();
        config.api.github.token = String::new();
        assert_eq!(
            errors(&config),
            "\n  - Missing env. var.: HOOK_API_GITHUB_TOKEN"
        );

        config.dry_run = true;
        assert!(validate_configuration(&config).is_ok());
    }

    #[test]
    fn invalid_values() {
        let mut config = arrange_config();
        config.server.bind_ip = "localhost".into();
        config.downstream.repository = "google-libphonenumber".into();
        config.commit.message_template = "Update libphonenumber".into();

        assert_eq!(
            errors(&config),
            "\n  - Invalid env. var.: HOOK_SERVER_BIND_IP (not an IP address)\
            \n  - Invalid env. var.: HOOK_DOWNSTREAM_REPOSITORY (expected owner/name)\
            \n  - Invalid env. var.: HOOK_COMMIT_MESSAGE_TEMPLATE (missing {version} placeholder)"
        );
    }
}
