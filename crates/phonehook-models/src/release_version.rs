use phonehook_config::VERSION_PLACEHOLDER;
use serde::{Deserialize, Serialize};

/// Substring identifying a tag reference.
pub const TAG_NAMESPACE: &str = "refs/tags/";
/// Prefix removed from a tag reference to get the version.
pub const TAG_PREFIX: &str = "refs/tags/v";

/// Release version, extracted from a pushed tag reference.
///
/// The remainder after the tag prefix is kept verbatim: `refs/tags/v8.12.0-beta`
/// gives `8.12.0-beta`, and a malformed version only fails later, when the
/// upstream archive cannot be found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    /// Creates a version from its raw value.
    pub fn new<T: Into<String>>(version: T) -> Self {
        Self(version.into())
    }

    /// Extract a version from a git reference.
    ///
    /// Returns `None` when the reference is not a tag.
    pub fn from_reference(reference: &str) -> Option<Self> {
        if !reference.contains(TAG_NAMESPACE) {
            return None;
        }

        Some(Self(reference.replace(TAG_PREFIX, "")))
    }

    /// Get the raw version.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Version with every dot replaced by a dash, safe for branch names.
    pub fn dashed(&self) -> String {
        self.0.replace('.', "-")
    }

    /// Render a template with the raw version.
    pub fn render(&self, template: &str) -> String {
        template.replace(VERSION_PLACEHOLDER, &self.0)
    }

    /// Render a branch name template with the dashed version.
    pub fn branch_name(&self, template: &str) -> String {
        template.replace(VERSION_PLACEHOLDER, &self.dashed())
    }
}

impl std::fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
