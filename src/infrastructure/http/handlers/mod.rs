//! HTTP Handlers

mod category;
mod fallback;
mod ping;
mod question;
mod quiz;

pub use category::*;
pub use fallback::*;
pub use ping::*;
pub use question::*;
pub use quiz::*;
