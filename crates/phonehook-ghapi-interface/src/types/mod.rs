mod common;
mod ping;
mod pulls;
mod push;

pub use common::*;
pub use ping::*;
pub use pulls::*;
pub use push::*;
