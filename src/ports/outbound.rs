//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, OutboundRequest, RawReply};

/// Hosted generative-language service. One request in, one reply out.
#[async_trait::async_trait]
pub trait LanguageServicePort: Send + Sync {
    /// Send a prepared request and return the raw reply.
    ///
    /// Transport failures, non-success statuses and empty candidate lists map to
    /// `DomainError::Service`. The reply text is NOT validated here.
    async fn generate(&self, request: &OutboundRequest) -> Result<RawReply, DomainError>;
}

/// Key-value persistence. Values are opaque strings (serialized by the caller).
#[async_trait::async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read a value. `Ok(None)` when the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Write a value and persist it before returning.
    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
}
