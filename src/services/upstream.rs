// src/services/upstream.rs
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::{
    config::RelayConfig,
    error::{AppError, AppResult},
    prompt::Mode,
};

pub const MODEL: &str = "deepseek-chat";
pub const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Serialize)]
pub struct CompletionMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'static str,
    pub messages: [CompletionMessage<'a>; 2],
    pub temperature: f32,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(mode: Mode, user_message: &'a str) -> Self {
        Self {
            model: MODEL,
            messages: [
                CompletionMessage {
                    role: "system",
                    content: mode.system_prompt(),
                },
                CompletionMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            temperature: TEMPERATURE,
        }
    }
}

/// Single-shot client for the chat-completion API. Cloning shares the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl UpstreamClient {
    /// Fails only when the TLS backend cannot be initialised.
    pub fn new(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Sends the two-message conversation and returns the first completion's text.
    pub async fn complete(&self, mode: Mode, user_message: &str) -> AppResult<String> {
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;
        let payload = CompletionRequest::new(mode, user_message);

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        info!(status = status.as_u16(), "AI service responded");

        let body = response.text().await.map_err(AppError::Connectivity)?;

        if !status.is_success() {
            return Err(AppError::UpstreamStatus { status, body });
        }

        extract_reply(&body)
    }
}

fn classify_send_error(err: reqwest::Error) -> AppError {
    if err.is_builder() {
        AppError::Internal(err.to_string())
    } else {
        AppError::Connectivity(err)
    }
}

/// Pulls `choices[0].message.content` out of a completion body.
pub fn extract_reply(body: &str) -> AppResult<String> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| AppError::UnexpectedFormat(format!("invalid JSON ({e}): {body}")))?;

    value
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            AppError::UnexpectedFormat(format!("missing choices[0].message.content: {body}"))
        })
}
