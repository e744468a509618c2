//! Utils Module
pub mod logging;
pub mod preview;

pub use preview::{preview, DEFAULT_PREVIEW_BYTES};
