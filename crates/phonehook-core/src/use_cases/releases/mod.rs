pub(crate) mod commit_and_push;
pub(crate) mod fetch_upstream_release;
pub(crate) mod open_pull_request;
pub(crate) mod process_push_event;
pub(crate) mod stage_repository;
pub(crate) mod update_release;

pub use commit_and_push::CommitAndPushInterface;
pub use fetch_upstream_release::FetchUpstreamReleaseInterface;
pub use open_pull_request::OpenPullRequestInterface;
pub use process_push_event::ProcessPushEventInterface;
pub use stage_repository::{StageRepositoryInterface, StagingArea};
pub use update_release::UpdateReleaseInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    commit_and_push::MockCommitAndPushInterface,
    fetch_upstream_release::MockFetchUpstreamReleaseInterface,
    open_pull_request::MockOpenPullRequestInterface,
    process_push_event::MockProcessPushEventInterface,
    stage_repository::MockStageRepositoryInterface, update_release::MockUpdateReleaseInterface,
};
