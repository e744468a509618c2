//! Result Client
//!
//! Single-key lookups against the remote key-value service.

mod http;
mod response;

pub use http::HttpResultClient;
pub use response::extract_value;

use async_trait::async_trait;

use crate::error::QuizResult;
use crate::quiz::LookupKey;

/// One read-only lookup per call. The caller picks the endpoint; the client
/// does not infer it from the key's namespace.
#[async_trait]
pub trait ResultClient: Send + Sync {
    /// Fetch the normalized text stored under `key` at `endpoint`.
    async fn fetch(&self, endpoint: &str, key: &LookupKey) -> QuizResult<String>;
}
