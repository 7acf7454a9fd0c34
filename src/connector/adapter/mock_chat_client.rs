use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{Credential, DomainError, Role, Turn};

/// Deterministic, offline [`ChatClient`].
///
/// Scripted outcomes are returned in order; once the script runs out the
/// client echoes the last user turn. Every call is recorded so tests can
/// assert on what was sent.
pub struct MockChatClient {
    script: Mutex<VecDeque<Result<String, DomainError>>>,
    requests: Mutex<Vec<Vec<Turn>>>,
    calls: AtomicUsize,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        lock(&self.script).push_back(Ok(reply.into()));
        self
    }

    pub fn with_error(self, error: DomainError) -> Self {
        lock(&self.script).push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Transcripts received, one entry per call.
    pub fn requests(&self) -> Vec<Vec<Turn>> {
        lock(&self.requests).clone()
    }

    fn echo(transcript: &[Turn]) -> String {
        let last_user = transcript
            .iter()
            .rev()
            .find(|t| t.role() == Role::User)
            .map(|t| t.content())
            .unwrap_or_default();
        format!("echo: {last_user}")
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(
        &self,
        transcript: &[Turn],
        credential: &Credential,
    ) -> Result<String, DomainError> {
        if credential.is_empty() {
            return Err(DomainError::MissingCredential);
        }

        self.calls.fetch_add(1, Ordering::SeqCst);
        lock(&self.requests).push(transcript.to_vec());

        let scripted = lock(&self.script).pop_front();
        debug!("MockChatClient: call with {} turns", transcript.len());

        scripted.unwrap_or_else(|| Ok(Self::echo(transcript)))
    }
}
