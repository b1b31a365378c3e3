use phonehook_config::Config;
use phonehook_models::ReleaseVersion;

/// Every name derived from a release version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNames {
    pub version: ReleaseVersion,
    pub branch: String,
    pub base_branch: String,
    pub commit_message: String,
    pub pull_request_title: String,
    pub pull_request_body: String,
    pub archive_url: String,
}

impl ReleaseNames {
    pub fn new(config: &Config, version: &ReleaseVersion) -> Self {
        let commit_message = version.render(&config.commit.message_template);

        Self {
            version: version.clone(),
            branch: version.branch_name(&config.downstream.branch_template),
            base_branch: config.downstream.base_branch.clone(),
            pull_request_title: commit_message.clone(),
            commit_message,
            pull_request_body: version.render(&config.pull_request.body_template),
            archive_url: version.render(&config.upstream.archive_url_template),
        }
    }
}
