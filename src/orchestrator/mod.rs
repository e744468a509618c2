//! Orchestrator Module
//!
//! Drives the encoder and the result client for one quiz, and keeps the
//! per-session flow state around it.

pub mod runner;
pub mod session;

pub use runner::TestOrchestrator;
pub use session::{Phase, QuizSession, TestState, CARDS_PER_ROUND};
