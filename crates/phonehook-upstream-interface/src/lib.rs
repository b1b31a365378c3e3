//! Upstream release interface

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;

pub use errors::{Result, UpstreamError};
pub use interface::UpstreamService;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockUpstreamService;
