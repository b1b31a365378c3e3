use serde::{Deserialize, Serialize};

use crate::types::common::{GhCommitUser, GhRepository, GhUser};

/// GitHub Push event.
///
/// Sent for branch and tag pushes alike; `reference` tells them apart.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPushEvent {
    /// Reference.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Before.
    pub before: String,
    /// After.
    pub after: String,
    /// Created.
    pub created: bool,
    /// Deleted.
    pub deleted: bool,
    /// Forced.
    pub forced: bool,
    /// Base reference.
    pub base_ref: Option<String>,
    /// Compare URL.
    pub compare: String,
    /// Repository.
    pub repository: GhRepository,
    /// Pusher.
    pub pusher: GhCommitUser,
    /// Sender.
    pub sender: Option<GhUser>,
}
