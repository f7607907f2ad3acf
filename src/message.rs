// src/message.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    /// Non-string values are tolerated and select the standard prompt.
    #[serde(default)]
    pub mode: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub status: String,
    pub available_endpoints: BTreeMap<String, String>,
    pub documentation: String,
}

impl ServiceInfo {
    pub fn current() -> Self {
        let mut available_endpoints = BTreeMap::new();
        available_endpoints.insert(
            "POST /api/chat".to_string(),
            "Main chat endpoint for AI tutoring".to_string(),
        );

        Self {
            message: "Tutor relay API is running".to_string(),
            status: "active".to_string(),
            available_endpoints,
            documentation: "Relays tutoring questions to a chat-completion model, \
                            optionally with a culturally adaptive system prompt."
                .to_string(),
        }
    }
}
