use async_trait::async_trait;

use crate::domain::{Credential, DomainError, Turn};

/// An interface for sending a chat transcript to an LLM and receiving the
/// assistant's reply.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. [`crate::application::ChatSession`] stays decoupled from any
/// particular provider or HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Perform exactly one exchange for `transcript` and return the reply text.
    async fn complete(
        &self,
        transcript: &[Turn],
        credential: &Credential,
    ) -> Result<String, DomainError>;
}
