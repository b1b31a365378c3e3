use serde::{Deserialize, Serialize};

use crate::types::common::GhBranchShort;

/// GitHub Pull request, as returned on creation.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequest {
    /// Number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// Web URL.
    pub html_url: String,
    /// Head branch.
    pub head: GhBranchShort,
    /// Base branch.
    pub base: GhBranchShort,
}
