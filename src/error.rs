//! Error types shared across the quiz pipeline.

use thiserror::Error;

/// Failure of a single quiz operation.
///
/// Every variant is terminal for the call that produced it: nothing is
/// retried and no partial result is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The caller supplied selections the pipeline cannot use.
    #[error("{0}")]
    InvalidInput(String),

    /// The lookup service could not be reached or answered with a failure status.
    #[error("{0}")]
    Transport(String),

    /// Missing or malformed configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl QuizError {
    pub fn insufficient_selections() -> Self {
        QuizError::InvalidInput("insufficient selections".to_string())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, QuizError::InvalidInput(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, QuizError::Transport(_))
    }
}

impl From<reqwest::Error> for QuizError {
    fn from(err: reqwest::Error) -> Self {
        QuizError::Transport(err.to_string())
    }
}

pub type QuizResult<T> = Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_verbatim() {
        assert_eq!(QuizError::insufficient_selections().to_string(), "insufficient selections");
        assert_eq!(QuizError::Transport("connection refused".into()).to_string(), "connection refused");
        assert!(QuizError::Config("LUSCHER_URL_P".into()).to_string().contains("LUSCHER_URL_P"));
    }
}
