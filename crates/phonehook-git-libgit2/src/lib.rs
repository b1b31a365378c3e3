//! Git adapter backed by libgit2.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod operations;
mod service;

pub use errors::Libgit2Error;
pub use service::Libgit2GitService;
