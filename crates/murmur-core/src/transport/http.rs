//! HTTP completion transport
//!
//! Posts an OpenAI-compatible chat-completions request on a tokio task and
//! hands the result back over an unbounded channel. The host drains the
//! receiver once per frame and feeds each `Completion` to the controller.

use reqwest::Client;
use serde_json::Value;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use super::{Completion, CompletionRequest, CompletionTransport, RequestTicket};
use crate::config::CompletionConfig;
use crate::constants;
use crate::error::TransportError;

/// Pull `choices[0].message.content` out of a chat-completions response
pub fn extract_reply_text(json: &Value) -> Option<String> {
    json.get("choices")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|msg| msg.get("content"))
        .and_then(|t| t.as_str())
        .map(|text| text.trim().to_string())
}

pub struct HttpTransport {
    http: Client,
    config: CompletionConfig,
    api_key: Option<String>,
    runtime: Handle,
    completions: mpsc::UnboundedSender<Completion>,
}

impl HttpTransport {
    fn create_http_client(config: &CompletionConfig) -> Client {
        Client::builder()
            .user_agent(constants::http::USER_AGENT)
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client: {}. Using default client.", e);
                Client::new()
            })
    }

    /// Create a transport using the key from `config.api_key_env`
    pub fn new(
        config: CompletionConfig,
        runtime: Handle,
    ) -> (Self, mpsc::UnboundedReceiver<Completion>) {
        let api_key = config.api_key();
        if api_key.is_none() {
            warn!(
                env = %config.api_key_env,
                "No API key found; requests will fail until it is set"
            );
        }
        Self::with_api_key(config, api_key, runtime)
    }

    pub fn with_api_key(
        config: CompletionConfig,
        api_key: Option<String>,
        runtime: Handle,
    ) -> (Self, mpsc::UnboundedReceiver<Completion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let transport = Self {
            http: Self::create_http_client(&config),
            config,
            api_key,
            runtime,
            completions: tx,
        };
        (transport, rx)
    }
}

impl CompletionTransport for HttpTransport {
    fn send(&mut self, ticket: RequestTicket, request: CompletionRequest) {
        let http = self.http.clone();
        let config = self.config.clone();
        let api_key = self.api_key.clone();
        let tx = self.completions.clone();

        self.runtime.spawn(async move {
            let completion = match call(&http, &config, api_key.as_deref(), &request).await {
                Ok(text) => {
                    info!(
                        generation = ticket.generation,
                        chars = text.chars().count(),
                        "Completion received"
                    );
                    Completion::text(ticket, text)
                }
                Err(e) => {
                    warn!(generation = ticket.generation, "Completion failed: {}", e);
                    Completion::failed(ticket, e.to_string())
                }
            };

            if tx.send(completion).is_err() {
                debug!(
                    generation = ticket.generation,
                    "Completion receiver dropped"
                );
            }
        });
    }
}

async fn call(
    http: &Client,
    config: &CompletionConfig,
    api_key: Option<&str>,
    request: &CompletionRequest,
) -> Result<String, TransportError> {
    let api_key = api_key.ok_or_else(|| {
        TransportError::NotConfigured(format!("set {} to an API key", config.api_key_env))
    })?;

    let body = serde_json::json!({
        "model": config.model,
        "max_tokens": config.max_tokens,
        "messages": [
            {"role": "system", "content": request.system_prompt},
            {"role": "user", "content": request.prompt}
        ]
    });

    debug!(url = %config.base_url, model = %config.model, "Posting completion request");
    let response = http
        .post(&config.base_url)
        .header("authorization", format!("Bearer {}", api_key))
        .header("content-type", "application/json")
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("API error response: {} - {}", status, body);
        return Err(TransportError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let json: Value = response.json().await?;
    extract_reply_text(&json).ok_or_else(|| {
        TransportError::Malformed("no choices[0].message.content in response".to_string())
    })
}
