//! Credential resolution for the topic endpoint.
//!
//! The publisher never constructs its credential directly; it is handed a
//! `CredentialProvider` at construction time so tests and local development
//! can substitute a fixed token.

use crate::{GridError, GridResult};
use async_trait::async_trait;

/// Source of the bearer token used to authenticate against the topic endpoint
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Resolve a token for the next publish call.
    ///
    /// Fails with `GridError::Credential` when no usable credential is
    /// available.
    async fn bearer_token(&self) -> GridResult<String>;
}

/// Ambient credential chain backed by process environment variables.
///
/// Tries each variable in order and uses the first non-empty value. The
/// default chain is `EVENT_GRID_ACCESS_TOKEN` then `EVENT_GRID_TOPIC_KEY`.
pub struct EnvCredential {
    chain: Vec<String>,
}

impl EnvCredential {
    pub fn new() -> Self {
        Self {
            chain: vec![
                "EVENT_GRID_ACCESS_TOKEN".to_string(),
                "EVENT_GRID_TOPIC_KEY".to_string(),
            ],
        }
    }

    /// Build a chain from explicit variable names
    pub fn with_chain(vars: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            chain: vars.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialProvider for EnvCredential {
    async fn bearer_token(&self) -> GridResult<String> {
        for var in &self.chain {
            if let Ok(value) = std::env::var(var) {
                if !value.is_empty() {
                    return Ok(value);
                }
            }
        }
        Err(GridError::Credential(
            "no usable credential source in chain".to_string(),
        ))
    }
}

/// Fixed-token provider for tests and local development
pub struct StaticCredential {
    token: String,
}

impl StaticCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredential {
    async fn bearer_token(&self) -> GridResult<String> {
        Ok(self.token.clone())
    }
}
