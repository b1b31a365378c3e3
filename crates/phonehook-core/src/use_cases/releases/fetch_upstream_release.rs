use std::path::Path;

use async_trait::async_trait;
use phonehook_models::ReleaseVersion;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait FetchUpstreamReleaseInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        version: &ReleaseVersion,
        destination: &Path,
    ) -> Result<Vec<String>>;
}

#[derive(Component)]
#[shaku(interface = FetchUpstreamReleaseInterface)]
pub(crate) struct FetchUpstreamRelease;

#[async_trait]
impl FetchUpstreamReleaseInterface for FetchUpstreamRelease {
    #[tracing::instrument(skip_all, fields(version = %version, destination = %destination.display()), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        version: &ReleaseVersion,
        destination: &Path,
    ) -> Result<Vec<String>> {
        Ok(ctx
            .upstream_service
            .fetch_release(version, destination)
            .await?)
    }
}
