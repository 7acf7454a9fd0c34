use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{Credential, DomainError, Turn};

pub const DEFAULT_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistral-small-latest";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Wire parameters for the chat-completions call.
///
/// The defaults are the fixed production values; tests swap the endpoint for
/// a local mock server.
#[derive(Debug, Clone, PartialEq)]
pub struct MistralConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for MistralConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl MistralConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [Turn],
    temperature: f64,
    max_tokens: u32,
}

/// Minimal subset of the chat-completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ApiResponse {
    fn into_content(self) -> Result<String, DomainError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .ok_or_else(|| DomainError::malformed("missing choices[0].message.content"))
    }
}

/// HTTP client for the Mistral AI chat-completions API.
///
/// Implements [`ChatClient`]. One call to [`ChatClient::complete`] issues
/// exactly one POST: no retries, no streaming, and no timeout beyond the
/// reqwest default.
pub struct MistralClient {
    client: reqwest::Client,
    config: MistralConfig,
}

impl MistralClient {
    pub fn new() -> Self {
        Self::with_config(MistralConfig::default())
    }

    pub fn with_config(config: MistralConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &MistralConfig {
        &self.config
    }

    fn build_request<'a>(&'a self, transcript: &'a [Turn]) -> ApiRequest<'a> {
        ApiRequest {
            model: &self.config.model,
            messages: transcript,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

impl Default for MistralClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MistralClient {
    async fn complete(
        &self,
        transcript: &[Turn],
        credential: &Credential,
    ) -> Result<String, DomainError> {
        if credential.is_empty() {
            return Err(DomainError::MissingCredential);
        }

        debug!(
            "MistralClient: POST {} model={} messages={}",
            self.config.endpoint,
            self.config.model,
            transcript.len()
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(reqwest::header::AUTHORIZATION, credential.bearer())
            .json(&self.build_request(transcript))
            .send()
            .await
            .map_err(|e| DomainError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("MistralClient: API returned {status}: {body}");
            return Err(DomainError::http_status(status.as_u16(), body));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::malformed(e.to_string()))?;

        api_response.into_content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_contract() {
        let client = MistralClient::new();
        let transcript = vec![Turn::user("Hello"), Turn::assistant("Hi"), Turn::user("Bye")];

        let body = serde_json::to_value(client.build_request(&transcript)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "model": "mistral-small-latest",
                "messages": [
                    {"role": "user", "content": "Hello"},
                    {"role": "assistant", "content": "Hi"},
                    {"role": "user", "content": "Bye"}
                ],
                "temperature": 0.7,
                "max_tokens": 1000
            })
        );
    }

    #[test]
    fn default_config_targets_mistral() {
        let config = MistralConfig::default();
        assert_eq!(config.endpoint, "https://api.mistral.ai/v1/chat/completions");
        assert_eq!(config.model, "mistral-small-latest");
        assert_eq!(config.max_tokens, 1000);
    }

    #[test]
    fn extracts_first_choice_content() {
        let response: ApiResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"first"}},{"message":{"content":"second"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_content().unwrap(), "first");
    }

    #[test]
    fn missing_content_path_is_malformed() {
        for body in [
            r#"{}"#,
            r#"{"choices":[]}"#,
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"message":{}}]}"#,
        ] {
            let response: ApiResponse = serde_json::from_str(body).unwrap();
            let err = response.into_content().unwrap_err();
            assert!(err.is_malformed(), "{body} should be malformed");
        }
    }

    #[tokio::test]
    async fn empty_credential_never_reaches_network() {
        // Unroutable endpoint: a network attempt would surface as Transport.
        let client = MistralClient::with_config(
            MistralConfig::default().with_endpoint("http://127.0.0.1:9/v1/chat/completions"),
        );
        let err = client
            .complete(&[Turn::user("Hello")], &Credential::empty())
            .await
            .unwrap_err();
        assert!(err.is_missing_credential());
    }
}
