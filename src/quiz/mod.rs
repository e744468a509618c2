//! Quiz Domain
//!
//! Cards, selections, lookup keys and the encoder that ties them together.

pub mod encoder;
pub mod types;

pub use encoder::{SelectionEncoder, UnknownSymbolPolicy, REQUIRED_PICKS};
pub use types::{CardId, LookupKey, Namespace, Selection, TestResult};
