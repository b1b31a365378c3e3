use std::path::Path;

use async_trait::async_trait;
use phonehook_models::ReleaseVersion;

use crate::Result;

/// Source of upstream release files.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait UpstreamService: Send + Sync {
    /// Fetch the generated files of a release into an existing directory.
    ///
    /// Returns the extracted filenames, sorted.
    async fn fetch_release(
        &self,
        version: &ReleaseVersion,
        destination: &Path,
    ) -> Result<Vec<String>>;
}
