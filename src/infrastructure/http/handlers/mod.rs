//! HTTP Handlers

mod book;
mod fallback;
mod ping;

pub use book::*;
pub use fallback::*;
pub use ping::*;
