use phonehook_models::ReleaseVersion;

/// Result of a commit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitResult {
    pub commit: String,
    pub pushed: bool,
}

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The reference is not a tag.
    Skipped { reference: String },
    /// The update was committed but neither pushed nor proposed.
    Committed {
        version: ReleaseVersion,
        branch: String,
        commit: String,
    },
    /// The pull request is open.
    Opened {
        version: ReleaseVersion,
        branch: String,
        commit: String,
        pull_request_number: u64,
        pull_request_url: String,
    },
}

impl PipelineOutcome {
    /// Short label, used in metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Skipped { .. } => "skipped",
            Self::Committed { .. } => "committed",
            Self::Opened { .. } => "opened",
        }
    }
}

impl std::fmt::Display for PipelineOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skipped { reference } => write!(f, "Skipped non-tag reference '{reference}'"),
            Self::Committed {
                version,
                branch,
                commit,
            } => write!(
                f,
                "Committed {commit} for version {version} on branch '{branch}' (not pushed)"
            ),
            Self::Opened {
                version,
                branch,
                pull_request_number,
                pull_request_url,
                ..
            } => write!(
                f,
                "Pull request #{pull_request_number} opened for version {version} from branch '{branch}' ({pull_request_url})"
            ),
        }
    }
}
