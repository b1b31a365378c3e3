//! Upstream release adapter, reading the generated files from the release tarball.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod extract;
mod service;

pub use errors::TarballError;
pub use service::TarballUpstreamService;
