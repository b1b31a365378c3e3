//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod errors;
mod event_type;
pub mod ghapi;
mod health;
mod metrics;
pub mod middlewares;
mod pipeline;
pub mod server;
pub mod utils;
mod webhook;

pub use errors::{Result, ServerError};
pub use pipeline::process_reference;
