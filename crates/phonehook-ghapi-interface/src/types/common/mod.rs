mod branch;
mod commit_user;
mod repository;
mod user;

pub use branch::GhBranchShort;
pub use commit_user::GhCommitUser;
pub use repository::GhRepository;
pub use user::GhUser;
