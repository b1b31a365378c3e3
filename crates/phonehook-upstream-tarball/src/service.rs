use std::{io, path::Path, time::Duration};

use async_trait::async_trait;
use futures::TryStreamExt;
use phonehook_config::Config;
use phonehook_models::ReleaseVersion;
use phonehook_upstream_interface::{Result, UpstreamError, UpstreamService};
use reqwest::{Client, ClientBuilder};
use tokio_util::io::{StreamReader, SyncIoBridge};
use tracing::info;

use crate::{extract::extract_release_files, TarballError};

/// Upstream adapter downloading the release tarball.
#[derive(Clone)]
pub struct TarballUpstreamService {
    config: Config,
}

impl TarballUpstreamService {
    /// Creates new tarball adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, TarballError> {
        Ok(ClientBuilder::new()
            .timeout(Duration::from_millis(self.config.upstream.timeout))
            .user_agent(format!("phonehook/{}", self.config.version))
            .build()?)
    }

    /// Get the archive URL of a release.
    pub fn archive_url(&self, version: &ReleaseVersion) -> String {
        version.render(&self.config.upstream.archive_url_template)
    }

    async fn download_and_extract(&self, url: &str, destination: &Path) -> Result<Vec<String>> {
        let limit = self.config.upstream.max_download_size;
        let response = match self.get_client()?.get(url).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return Err(UpstreamError::Timeout {
                    url: url.into(),
                    timeout: self.config.upstream.timeout,
                })
            }
            Err(e) => return Err(TarballError::from(e).into()),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::UnexpectedStatus {
                url: url.into(),
                status: status.as_u16(),
            });
        }

        if response.content_length().is_some_and(|len| len > limit) {
            return Err(UpstreamError::TooLarge {
                url: url.into(),
                limit,
            });
        }

        let stream = response
            .bytes_stream()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e));
        let reader = SyncIoBridge::new(StreamReader::new(Box::pin(stream)));

        let marker = self.config.upstream.path_marker.clone();
        let destination = destination.to_owned();
        let url = url.to_owned();
        tokio::task::spawn_blocking(move || {
            extract_release_files(reader, &marker, &destination, limit, &url)
        })
        .await
        .map_err(|e| UpstreamError::from(TarballError::TaskError { source: e }))?
    }
}

#[async_trait]
impl UpstreamService for TarballUpstreamService {
    #[tracing::instrument(skip_all, fields(version = %version))]
    async fn fetch_release(
        &self,
        version: &ReleaseVersion,
        destination: &Path,
    ) -> Result<Vec<String>> {
        let url = self.archive_url(version);
        let timeout = self.config.upstream.timeout;
        info!(url = %url, "Downloading upstream release");

        let files = tokio::time::timeout(
            Duration::from_millis(timeout),
            self.download_and_extract(&url, destination),
        )
        .await
        .map_err(|_| UpstreamError::Timeout {
            url: url.clone(),
            timeout,
        })??;

        info!(count = files.len(), "Extracted upstream release files");
        Ok(files)
    }
}
