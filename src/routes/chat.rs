use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    message::{ChatRequest, ChatResponse, ServiceInfo},
    prompt::Mode,
    state::SharedState,
};

pub async fn home_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let request_id = Uuid::new_v4();
    let span = info_span!("chat", %request_id);

    async move {
        let Json(body) = payload.map_err(rejection_to_error)?;
        let request = parse_request(body)?;

        // Blank check only; the message is forwarded untouched.
        let message = request
            .message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("Missing message in request".to_string()))?;

        let mode = Mode::from_request(request.mode.as_ref().and_then(Value::as_str));
        info!(mode = mode.as_str(), chars = message.chars().count(), "relaying chat message");

        let response = state.upstream.complete(mode, message).await?;
        Ok::<_, AppError>(Json(ChatResponse { response }))
    }
    .instrument(span)
    .await
}

/// Only a JSON object is a chat request; serde alone would also accept an array.
fn parse_request(body: Value) -> AppResult<ChatRequest> {
    if !body.is_object() {
        return Err(AppError::BadRequest(
            "Missing message in request: body must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request data: {e}")))
}

fn rejection_to_error(err: JsonRejection) -> AppError {
    let message = match err {
        JsonRejection::JsonDataError(e) => format!("Invalid request data: {}", e.body_text()),
        JsonRejection::JsonSyntaxError(e) => format!("Invalid JSON body: {}", e.body_text()),
        JsonRejection::MissingJsonContentType(_) => {
            "Missing message in request: expected an application/json body".to_string()
        }
        other => format!("Failed to read request body: {}", other.body_text()),
    };
    AppError::BadRequest(message)
}
