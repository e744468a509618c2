//! Luscher Color Quiz
//!
//! Core of a Luscher-style color-preference test:
//! - Selection encoding into namespaced lookup keys
//! - Lookups against a remote key-value service with JSON/raw-text normalization
//! - Orchestration of both lookups into a single result
//! - Explicit per-session quiz state

pub mod client;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod quiz;
pub mod utils;

// Re-exports for convenience
pub use client::{HttpResultClient, ResultClient};
pub use config::LookupConfig;
pub use error::{QuizError, QuizResult};
pub use orchestrator::{QuizSession, TestOrchestrator};
pub use quiz::{CardId, LookupKey, Selection, SelectionEncoder, TestResult};
