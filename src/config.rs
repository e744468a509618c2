//! Lookup configuration
//!
//! Endpoints and client behavior, loaded from the environment.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, QuizResult};
use crate::quiz::UnknownSymbolPolicy;

pub const ENV_URL_P: &str = "LUSCHER_URL_P";
pub const ENV_URL_X: &str = "LUSCHER_URL_X";
pub const ENV_TIMEOUT_SECS: &str = "LUSCHER_TIMEOUT_SECS";
pub const ENV_STRICT_SYMBOLS: &str = "LUSCHER_STRICT_SYMBOLS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Endpoint serving personality (`p`) keys
    pub url_p: String,
    /// Endpoint serving current-state (`x`) keys
    pub url_x: String,
    /// Per-request timeout
    pub timeout: Duration,
    pub unknown_symbols: UnknownSymbolPolicy,
}

impl LookupConfig {
    pub fn new(url_p: impl Into<String>, url_x: impl Into<String>) -> Self {
        Self {
            url_p: url_p.into(),
            url_x: url_x.into(),
            timeout: DEFAULT_TIMEOUT,
            unknown_symbols: UnknownSymbolPolicy::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_unknown_symbols(mut self, policy: UnknownSymbolPolicy) -> Self {
        self.unknown_symbols = policy;
        self
    }

    /// Load from process environment variables.
    pub fn from_env() -> QuizResult<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Load from an explicit variable map.
    pub fn from_vars(vars: &HashMap<String, String>) -> QuizResult<Self> {
        let required = |name: &str| -> QuizResult<String> {
            vars.get(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| QuizError::Config(format!("{} is not set", name)))
        };

        let mut config = Self::new(required(ENV_URL_P)?, required(ENV_URL_X)?);

        if let Some(raw) = vars.get(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    QuizError::Config(format!("{} must be a positive integer, got {:?}", ENV_TIMEOUT_SECS, raw))
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = vars.get(ENV_STRICT_SYMBOLS) {
            if matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes") {
                config.unknown_symbols = UnknownSymbolPolicy::Reject;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> QuizResult<()> {
        for (name, url) in [(ENV_URL_P, &self.url_p), (ENV_URL_X, &self.url_x)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(QuizError::Config(format!("{} must be an http(s) URL, got {:?}", name, url)));
            }
        }
        if self.timeout.is_zero() {
            return Err(QuizError::Config("timeout must be non-zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_minimal_config() {
        let config = LookupConfig::from_vars(&vars(&[
            (ENV_URL_P, "https://lookup.example/p"),
            (ENV_URL_X, "https://lookup.example/x"),
        ]))
        .unwrap();

        assert_eq!(config.url_p, "https://lookup.example/p");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.unknown_symbols, UnknownSymbolPolicy::DefaultToZero);
    }

    #[test]
    fn test_optional_settings() {
        let config = LookupConfig::from_vars(&vars(&[
            (ENV_URL_P, "http://localhost:8080/p"),
            (ENV_URL_X, "http://localhost:8080/x"),
            (ENV_TIMEOUT_SECS, "3"),
            (ENV_STRICT_SYMBOLS, "true"),
        ]))
        .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.unknown_symbols, UnknownSymbolPolicy::Reject);
    }

    #[test]
    fn test_missing_url() {
        let err = LookupConfig::from_vars(&vars(&[(ENV_URL_P, "http://a/p")])).unwrap_err();
        assert_eq!(err, QuizError::Config(format!("{} is not set", ENV_URL_X)));
    }

    #[test]
    fn test_bad_values() {
        let bad_timeout = LookupConfig::from_vars(&vars(&[
            (ENV_URL_P, "http://a/p"),
            (ENV_URL_X, "http://a/x"),
            (ENV_TIMEOUT_SECS, "0"),
        ]));
        assert!(bad_timeout.is_err());

        let bad_scheme = LookupConfig::from_vars(&vars(&[
            (ENV_URL_P, "ftp://a/p"),
            (ENV_URL_X, "http://a/x"),
        ]));
        assert!(matches!(bad_scheme, Err(QuizError::Config(_))));
    }
}
