//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
mod naming;
mod outcome;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
pub use naming::ReleaseNames;
pub use outcome::{CommitResult, PipelineOutcome};
use shaku::module;
use use_cases::releases::{
    commit_and_push::CommitAndPush, fetch_upstream_release::FetchUpstreamRelease,
    open_pull_request::OpenPullRequest, process_push_event::ProcessPushEvent,
    stage_repository::StageRepository, update_release::UpdateRelease,
};

module! {
    pub CoreModule {
        components = [
            ProcessPushEvent, UpdateRelease, FetchUpstreamRelease,
            StageRepository, CommitAndPush, OpenPullRequest
        ],
        providers = []
    }
}
