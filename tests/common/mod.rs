// Fake chat-completion service used by the integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use serde_json::Value;
use tower::util::ServiceExt;

use tutor_relay::{config::RelayConfig, routes::create_router, state::AppState};

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Clone, Debug)]
pub struct Recorded {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<Recorded>>>,
}

pub struct FakeUpstream {
    pub url: String,
    received: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeUpstream {
    /// Answers every completion call with `status` and `body`.
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let canned = Canned {
            status,
            body: body.into(),
            received: received.clone(),
        };

        let app = Router::new()
            .route(COMPLETIONS_PATH, post(completions))
            .with_state(canned);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}{COMPLETIONS_PATH}"),
            received,
        }
    }

    pub async fn replying(content: &str) -> Self {
        let body = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        });
        Self::start(StatusCode::OK, body.to_string()).await
    }

    pub fn received(&self) -> Vec<Recorded> {
        self.received.lock().unwrap().clone()
    }

    pub fn system_prompt_sent(&self) -> String {
        let calls = self.received();
        assert_eq!(calls.len(), 1, "expected exactly one upstream call");
        calls[0].body["messages"][0]["content"]
            .as_str()
            .unwrap()
            .to_string()
    }
}

async fn completions(
    State(canned): State<Canned>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    canned
        .received
        .lock()
        .unwrap()
        .push(Recorded { authorization, body });

    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
}

/// A URL on a port nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}{COMPLETIONS_PATH}")
}

pub fn relay_config(api_url: &str, api_key: Option<&str>) -> RelayConfig {
    let config = RelayConfig::default().with_api_url(api_url);
    match api_key {
        Some(key) => config.with_api_key(key),
        None => config,
    }
}

/// Sends `body` to `POST /api/chat` and returns status plus parsed JSON.
pub async fn post_chat(config: RelayConfig, body: &str) -> (StatusCode, Value) {
    let app = create_router().with_state(Arc::new(AppState::new(config).unwrap()));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
