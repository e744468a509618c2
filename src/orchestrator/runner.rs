//! Test Orchestrator
//!
//! Validates a selection, derives both keys and resolves them against their
//! endpoints. Either both lookups succeed or the whole run fails.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::client::{HttpResultClient, ResultClient};
use crate::config::LookupConfig;
use crate::error::{QuizError, QuizResult};
use crate::quiz::{Selection, SelectionEncoder, TestResult, REQUIRED_PICKS};

pub struct TestOrchestrator {
    client: Arc<dyn ResultClient>,
    encoder: SelectionEncoder,
    url_p: String,
    url_x: String,
}

impl TestOrchestrator {
    pub fn new(client: Arc<dyn ResultClient>, config: &LookupConfig) -> Self {
        Self {
            client,
            encoder: SelectionEncoder::new(config.unknown_symbols),
            url_p: config.url_p.clone(),
            url_x: config.url_x.clone(),
        }
    }

    /// Build an orchestrator backed by `HttpResultClient`.
    pub fn from_config(config: &LookupConfig) -> QuizResult<Self> {
        config.validate()?;
        let client = HttpResultClient::new(config.timeout)?;
        Ok(Self::new(Arc::new(client), config))
    }

    pub async fn run(&self, selection: &Selection) -> QuizResult<TestResult> {
        if selection.len() < REQUIRED_PICKS {
            warn!("Rejecting selection with {} picks", selection.len());
            return Err(QuizError::insufficient_selections());
        }

        let (key_p, key_x) = self.encoder.encode(selection)?;
        debug!("Derived keys {} and {}", key_p, key_x);

        // Independent namespaces: both lookups are in flight together and
        // the first failure aborts the run.
        let (personality, current_state) = tokio::try_join!(
            self.client.fetch(&self.url_p, &key_p),
            self.client.fetch(&self.url_x, &key_x),
        )
        .inspect_err(|e| warn!("Lookup failed for {}/{}: {}", key_p, key_x, e))?;

        info!("Resolved {} and {}", key_p, key_x);
        Ok(TestResult::new(personality, current_state))
    }
}
