//! Selection Encoder
//!
//! Derives the two lookup keys from the first four picks of a round.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::types::{CardId, LookupKey, Namespace, Selection};
use crate::error::{QuizError, QuizResult};

/// Number of picks consumed from a round.
pub const REQUIRED_PICKS: usize = 4;

/// What to do with a symbol outside `A`..`H`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSymbolPolicy {
    /// Substitute digit `0`.
    #[default]
    DefaultToZero,
    /// Fail with `InvalidInput`.
    Reject,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionEncoder {
    policy: UnknownSymbolPolicy,
}

impl SelectionEncoder {
    pub fn new(policy: UnknownSymbolPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnknownSymbolPolicy {
        self.policy
    }

    /// Returns `(keyP, keyX)`.
    ///
    /// Fails with `InvalidInput` when fewer than four symbols are given, or
    /// when the policy is `Reject` and one of the first four is unknown.
    pub fn encode(&self, selection: &Selection) -> QuizResult<(LookupKey, LookupKey)> {
        let symbols = selection.symbols();
        if symbols.len() < REQUIRED_PICKS {
            return Err(QuizError::insufficient_selections());
        }

        let d0 = self.digit(&symbols[0])?;
        let d1 = self.digit(&symbols[1])?;
        let d2 = self.digit(&symbols[2])?;
        let d3 = self.digit(&symbols[3])?;

        Ok((
            LookupKey::new(Namespace::P, d0, d1),
            LookupKey::new(Namespace::X, d2, d3),
        ))
    }

    fn digit(&self, symbol: &str) -> QuizResult<char> {
        match (CardId::from_symbol(symbol), self.policy) {
            (Some(card), _) => Ok(card.digit()),
            (None, UnknownSymbolPolicy::DefaultToZero) => {
                warn!("Unknown card symbol {:?}, substituting digit 0", symbol);
                Ok('0')
            }
            (None, UnknownSymbolPolicy::Reject) => Err(QuizError::InvalidInput(format!(
                "unknown card symbol '{}'",
                symbol
            ))),
        }
    }
}
