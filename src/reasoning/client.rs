//! Chat-completions client
//!
//! A single-purpose adapter to the external text-completion endpoint.
//! Every failure mode (missing credential, transport, non-success status,
//! unparseable body) maps to a [`ReasoningError`] value; nothing escapes
//! this boundary. Each call is attempted exactly once.

use crate::config::ReasoningConfig;
use crate::ReasoningError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Client for the external text-completion service
///
/// The API key is injected at construction; a client built without one
/// short-circuits every call to [`ReasoningError::MissingApiKey`] without
/// touching the network.
pub struct ReasoningClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl ReasoningClient {
    /// Creates a reasoning client for the configured endpoint and model
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint and model configuration
    /// * `api_key` - Bearer credential, or None when absent from the environment
    pub fn new(
        config: &ReasoningConfig,
        api_key: Option<String>,
    ) -> Result<Self, reqwest::Error> {
        // Timeouts are per call, not per client: callers pick 30-45s
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
        })
    }

    /// Whether a credential was available at construction
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends one prompt to the completion endpoint
    ///
    /// # Arguments
    ///
    /// * `prompt` - The user-role message content
    /// * `temperature` - Sampling temperature for this call site
    /// * `timeout` - Deadline for this call
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The first choice's message content
    /// * `Err(ReasoningError)` - Any failure, classified; never panics
    pub async fn complete(
        &self,
        prompt: &str,
        temperature: f64,
        timeout: Duration,
    ) -> Result<String, ReasoningError> {
        let api_key = self.api_key.as_deref().ok_or(ReasoningError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .timeout(timeout)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReasoningError::Status {
                status: status.as_u16(),
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ReasoningError::MalformedResponse(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ReasoningError::MalformedResponse("response contained no choices".to_string())
            })
    }
}

fn classify_transport_error(e: reqwest::Error) -> ReasoningError {
    if e.is_timeout() {
        ReasoningError::Timeout
    } else {
        ReasoningError::Transport(e.to_string())
    }
}
