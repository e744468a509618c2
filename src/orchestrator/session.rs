//! Quiz Session
//!
//! Per-session state of one test run: the picks of both rounds, the flow
//! state, the last outcome and a loading flag observers can watch. The
//! session is owned by its caller and passed to nothing global.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use super::runner::TestOrchestrator;
use crate::error::{QuizError, QuizResult};
use crate::quiz::{CardId, Selection, TestResult};

/// Cards picked per round.
pub const CARDS_PER_ROUND: usize = 8;

/// Outcome-level state reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestState {
    Idle,
    Reset,
    Completed,
}

/// Where the user currently is in the two-round flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Intro,
    FirstRound,
    SecondRound,
    AwaitingResult,
}

#[derive(Debug)]
pub struct QuizSession {
    id: Uuid,
    state: TestState,
    phase: Phase,
    /// Picks of the round in progress; after round two this is the selection submitted
    picks: Vec<CardId>,
    first_round: Vec<CardId>,
    result: Option<TestResult>,
    error: Option<String>,
    loading: watch::Sender<bool>,
}

impl QuizSession {
    pub fn new() -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            id: Uuid::new_v4(),
            state: TestState::Idle,
            phase: Phase::Intro,
            picks: Vec::with_capacity(CARDS_PER_ROUND),
            first_round: Vec::new(),
            result: None,
            error: None,
            loading,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> TestState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn first_round(&self) -> &[CardId] {
        &self.first_round
    }

    pub fn current_picks(&self) -> &[CardId] {
        &self.picks
    }

    pub fn result(&self) -> Option<&TestResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Receiver that observes the loading flag flip around `generate_result`.
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Begin the first round.
    pub fn start(&mut self) {
        self.picks.clear();
        self.first_round.clear();
        self.phase = Phase::FirstRound;
        info!(session = %self.id, "Quiz started");
    }

    /// Record one pick. Returns the phase after the pick.
    pub fn pick(&mut self, card: CardId) -> QuizResult<Phase> {
        if !matches!(self.phase, Phase::FirstRound | Phase::SecondRound) {
            return Err(QuizError::InvalidInput(format!(
                "no round in progress (phase {:?})",
                self.phase
            )));
        }
        if self.picks.contains(&card) {
            return Err(QuizError::InvalidInput(format!(
                "card {} already picked this round",
                card
            )));
        }

        self.picks.push(card);
        if self.picks.len() < CARDS_PER_ROUND {
            return Ok(self.phase);
        }

        self.phase = match self.phase {
            Phase::FirstRound => {
                // Round one is kept for reference only; the pick list restarts.
                self.first_round = std::mem::take(&mut self.picks);
                Phase::SecondRound
            }
            _ => Phase::AwaitingResult,
        };
        info!(session = %self.id, phase = ?self.phase, "Round finished");
        Ok(self.phase)
    }

    /// The selection that `generate_result` submits.
    pub fn lookup_selection(&self) -> Selection {
        Selection::from(self.picks.as_slice())
    }

    /// Run the lookup for the finished second round and store the outcome.
    ///
    /// Fails with `InvalidInput` unless both rounds are complete.
    pub async fn generate_result(&mut self, orchestrator: &TestOrchestrator) -> QuizResult<TestResult> {
        if self.phase != Phase::AwaitingResult {
            let err = QuizError::InvalidInput("no completed round".to_string());
            warn!(session = %self.id, phase = ?self.phase, "Result requested early");
            self.record_failure(&err);
            return Err(err);
        }

        let selection = self.lookup_selection();
        let span = info_span!("generate_result", session = %self.id);

        self.loading.send_replace(true);
        let outcome = orchestrator.run(&selection).instrument(span).await;
        self.loading.send_replace(false);

        match &outcome {
            Ok(result) => {
                self.result = Some(result.clone());
                self.error = None;
                self.state = TestState::Completed;
                info!(session = %self.id, "Result ready");
            }
            Err(e) => {
                warn!(session = %self.id, "Result failed: {}", e);
                self.record_failure(e);
            }
        }
        outcome
    }

    /// A failed attempt drops any earlier result so the two never coexist.
    fn record_failure(&mut self, err: &QuizError) {
        self.result = None;
        self.error = Some(err.to_string());
        if self.state == TestState::Completed {
            self.state = TestState::Idle;
        }
    }

    /// Clear everything and return to the intro screen.
    pub fn reset(&mut self) {
        self.state = TestState::Reset;
        self.phase = Phase::Intro;
        self.picks.clear();
        self.first_round.clear();
        self.result = None;
        self.error = None;
        self.loading.send_replace(false);
        info!(session = %self.id, "Quiz reset");
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
