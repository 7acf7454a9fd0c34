use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::ChatClient;
use crate::domain::{Credential, DomainError, TranscriptStore, Turn};

/// Per-session chat state: one transcript, one credential, and the client
/// used to obtain completions.
///
/// Nothing here is global. A host serving several users creates one
/// `ChatSession` per user; the `ChatClient` may be shared between them.
pub struct ChatSession {
    id: String,
    transcript: TranscriptStore,
    credential: Credential,
    client: Arc<dyn ChatClient>,
}

impl ChatSession {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            transcript: TranscriptStore::new(),
            credential: Credential::empty(),
            client,
        }
    }

    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = credential;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = credential;
    }

    pub fn has_credential(&self) -> bool {
        !self.credential.is_empty()
    }

    pub fn transcript(&self) -> &[Turn] {
        self.transcript.all()
    }

    /// Empty the transcript. The credential is kept.
    pub fn clear(&mut self) {
        debug!(session = %self.id, "Clearing {} turns", self.transcript.len());
        self.transcript.clear();
    }

    /// Whether `text` would be accepted by [`Self::submit`]. The missing
    /// credential is reported ahead of blank text.
    pub fn check_submission(&self, text: &str) -> Result<(), DomainError> {
        if self.credential.is_empty() {
            return Err(DomainError::MissingCredential);
        }
        if text.trim().is_empty() {
            return Err(DomainError::invalid_input("message is empty"));
        }
        Ok(())
    }

    /// Submit user text and append the assistant's answer.
    ///
    /// Returns `Err` only when the turn is rejected before anything is
    /// recorded (missing credential, blank text). Exchange failures are
    /// rendered with [`DomainError::user_message`] and stored as the
    /// assistant turn, so the session is always usable afterwards.
    pub async fn submit(&mut self, text: &str) -> Result<&Turn, DomainError> {
        self.check_submission(text)?;

        self.transcript.append(Turn::user(text));

        let reply = match self
            .client
            .complete(self.transcript.all(), &self.credential)
            .await
        {
            Ok(content) => {
                debug!(session = %self.id, "Received reply ({} chars)", content.len());
                content
            }
            Err(e) => {
                warn!(session = %self.id, "Completion failed: {e}");
                e.user_message()
            }
        };

        self.transcript.append(Turn::assistant(reply));

        self.transcript
            .last()
            .ok_or_else(|| DomainError::internal("transcript empty after append"))
    }
}
