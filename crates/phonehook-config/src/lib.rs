//! Config module.

use std::env;

/// Placeholder replaced by the release version in every template.
pub const VERSION_PLACEHOLDER: &str = "{version}";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
    /// Server webhook secret.
    pub webhook_secret: String,
    /// Disable webhook signature verification.
    pub disable_webhook_signature: bool,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub personal token, used for both the API and git pushes.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct DownstreamConfig {
    /// Repository path, as `owner/name`.
    pub repository: String,
    /// Clone URL. Derived from the repository path when empty.
    pub clone_url: String,
    /// Base branch, used for the clone and as pull request base.
    pub base_branch: String,
    /// Subfolder receiving the fetched files.
    pub target_directory: String,
    /// Clone depth (0 for a full clone).
    pub clone_depth: u32,
    /// Username used for git pushes. Defaults to the repository owner.
    pub push_username: String,
    /// Branch name template.
    pub branch_template: String,
}

impl DownstreamConfig {
    /// Get the effective clone URL.
    pub fn effective_clone_url(&self) -> String {
        if self.clone_url.is_empty() {
            format!("https://github.com/{}.git", self.repository)
        } else {
            self.clone_url.clone()
        }
    }

    /// Get the effective push username.
    pub fn effective_push_username(&self) -> String {
        if self.push_username.is_empty() {
            self.repository
                .split('/')
                .next()
                .unwrap_or_default()
                .to_string()
        } else {
            self.push_username.clone()
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Release archive URL template.
    pub archive_url_template: String,
    /// Only archive entries whose path contains this marker are extracted.
    pub path_marker: String,
    /// Whole fetch timeout (in milliseconds).
    pub timeout: u64,
    /// Maximum downloaded bytes.
    pub max_download_size: u64,
}

#[derive(Debug, Clone)]
pub struct CommitConfig {
    /// Author name.
    pub author_name: String,
    /// Author email.
    pub author_email: String,
    /// Commit message template, also used as pull request title.
    pub message_template: String,
}

#[derive(Debug, Clone)]
pub struct PullRequestConfig {
    /// Pull request body template.
    pub body_template: String,
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Hook configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Downstream repository options.
    pub downstream: DownstreamConfig,
    /// Upstream release options.
    pub upstream: UpstreamConfig,
    /// Commit options.
    pub commit: CommitConfig,
    /// Pull request options.
    pub pull_request: PullRequestConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// Server options.
    pub server: ServerConfig,
    /// Skip the push and the pull request creation.
    pub dry_run: bool,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Self::from_lookup(version, &|name| env::var(name).ok())
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }

    /// Create configuration from a variable lookup function.
    pub fn from_lookup(version: String, lookup: &dyn Fn(&str) -> Option<String>) -> Config {
        let vars = Vars(lookup);

        Config {
            api: ApiConfig {
                github: ApiGitHubConfig {
                    connect_timeout: vars.to_u64("HOOK_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: vars.to_str("HOOK_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    token: vars.to_str(
                        "HOOK_API_GITHUB_TOKEN",
                        &vars.to_str("GITHUB_TOKEN", ""),
                    ),
                },
            },
            downstream: DownstreamConfig {
                repository: vars.to_str(
                    "HOOK_DOWNSTREAM_REPOSITORY",
                    "ruimarinho/google-libphonenumber",
                ),
                clone_url: vars.to_str("HOOK_DOWNSTREAM_CLONE_URL", ""),
                base_branch: vars.to_str("HOOK_DOWNSTREAM_BASE_BRANCH", "master"),
                target_directory: vars.to_str("HOOK_DOWNSTREAM_TARGET_DIRECTORY", "src"),
                clone_depth: vars.to_u32("HOOK_DOWNSTREAM_CLONE_DEPTH", 1),
                push_username: vars.to_str("HOOK_DOWNSTREAM_PUSH_USERNAME", ""),
                branch_template: vars.to_str(
                    "HOOK_DOWNSTREAM_BRANCH_TEMPLATE",
                    "support/update-libphonenumber-{version}",
                ),
            },
            upstream: UpstreamConfig {
                archive_url_template: vars.to_str(
                    "HOOK_UPSTREAM_ARCHIVE_URL_TEMPLATE",
                    "https://github.com/google/libphonenumber/archive/v{version}.tar.gz",
                ),
                path_marker: vars.to_str(
                    "HOOK_UPSTREAM_PATH_MARKER",
                    "javascript/i18n/phonenumbers/",
                ),
                timeout: vars.to_u64("HOOK_UPSTREAM_TIMEOUT", 15_000),
                max_download_size: vars.to_u64("HOOK_UPSTREAM_MAX_DOWNLOAD_SIZE", 64 * 1024 * 1024),
            },
            commit: CommitConfig {
                author_name: vars.to_str("HOOK_COMMIT_AUTHOR_NAME", "Rui Marinho"),
                author_email: vars.to_str("HOOK_COMMIT_AUTHOR_EMAIL", "ruipmarinho@gmail.com"),
                message_template: vars.to_str(
                    "HOOK_COMMIT_MESSAGE_TEMPLATE",
                    "Update libphonenumber@{version}",
                ),
            },
            pull_request: PullRequestConfig {
                body_template: vars.to_str(
                    "HOOK_PULL_REQUEST_BODY_TEMPLATE",
                    "Update libphonenumber@{version}.",
                ),
            },
            logging: LoggingConfig {
                use_bunyan: vars.to_bool("HOOK_LOGGING_USE_BUNYAN", false),
            },
            sentry: SentryConfig {
                url: vars.to_str("HOOK_SENTRY_URL", ""),
                traces_sample_rate: vars.to_f32("HOOK_SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            server: ServerConfig {
                bind_ip: vars.to_str("HOOK_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: vars.to_u16("HOOK_SERVER_BIND_PORT", 8008),
                workers_count: vars.to_optional_u16("HOOK_SERVER_WORKERS_COUNT", None),
                webhook_secret: vars.to_str("HOOK_SERVER_WEBHOOK_SECRET", ""),
                disable_webhook_signature: vars
                    .to_bool("HOOK_SERVER_DISABLE_WEBHOOK_SIGNATURE", false),
            },
            dry_run: vars.to_bool("HOOK_DRY_RUN", false),
            version,
        }
    }
}

struct Vars<'a>(&'a dyn Fn(&str) -> Option<String>);

impl Vars<'_> {
    fn to_u16(&self, name: &str, default: u16) -> u16 {
        (self.0)(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_optional_u16(&self, name: &str, default: Option<u16>) -> Option<u16> {
        (self.0)(name)
            .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_u32(&self, name: &str, default: u32) -> u32 {
        (self.0)(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_u64(&self, name: &str, default: u64) -> u64 {
        (self.0)(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_f32(&self, name: &str, default: f32) -> f32 {
        (self.0)(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_bool(&self, name: &str, default: bool) -> bool {
        (self.0)(name).map(|e| !e.is_empty()).unwrap_or(default)
    }

    fn to_str(&self, name: &str, default: &str) -> String {
        (self.0)(name).unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup("1.0.0".into(), &|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]);

        assert_eq!(config.downstream.repository, "ruimarinho/google-libphonenumber");
        assert_eq!(config.downstream.base_branch, "master");
        assert_eq!(config.downstream.target_directory, "src");
        assert_eq!(config.downstream.clone_depth, 1);
        assert_eq!(config.upstream.timeout, 15_000);
        assert_eq!(config.upstream.path_marker, "javascript/i18n/phonenumbers/");
        assert_eq!(config.server.bind_port, 8008);
        assert_eq!(config.server.workers_count, None);
        assert!(!config.dry_run);
        assert_eq!(config.version, "1.0.0");
    }

    #[test]
    fn token_fallback() {
        let config = config_from(&[("GITHUB_TOKEN", "abc")]);
        assert_eq!(config.api.github.token, "abc");

        let config = config_from(&[("GITHUB_TOKEN", "abc"), ("HOOK_API_GITHUB_TOKEN", "def")]);
        assert_eq!(config.api.github.token, "def");
    }

    #[test]
    fn invalid_numbers_use_defaults() {
        let config = config_from(&[
            ("HOOK_SERVER_BIND_PORT", "nope"),
            ("HOOK_SERVER_WORKERS_COUNT", "4"),
            ("HOOK_DRY_RUN", "1"),
        ]);

        assert_eq!(config.server.bind_port, 8008);
        assert_eq!(config.server.workers_count, Some(4));
        assert!(config.dry_run);
    }

    #[test]
    fn downstream_derived_values() {
        let config = config_from(&[]);
        assert_eq!(
            config.downstream.effective_clone_url(),
            "https://github.com/ruimarinho/google-libphonenumber.git"
        );
        assert_eq!(config.downstream.effective_push_username(), "ruimarinho");

        let config = config_from(&[
            ("HOOK_DOWNSTREAM_CLONE_URL", "file:///tmp/repo"),
            ("HOOK_DOWNSTREAM_PUSH_USERNAME", "bot"),
        ]);
        assert_eq!(config.downstream.effective_clone_url(), "file:///tmp/repo");
        assert_eq!(config.downstream.effective_push_username(), "bot");
    }

    #[test]
    fn templates_are_kept_verbatim() {
        let config = config_from(&[(
            "HOOK_PULL_REQUEST_BODY_TEMPLATE",
            "Update libphonenumber@{version}.\\nSee C:\\new",
        )]);
        assert_eq!(
            config.pull_request.body_template,
            "Update libphonenumber@{version}.\\nSee C:\\new"
        );
    }
}
