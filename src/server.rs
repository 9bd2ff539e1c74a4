//! HTTP API server.
//!
//! Exposes the chat engine as a JSON HTTP API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/api/health` | Health check; re-runs document initialization |
//! | `POST` | `/api/chat` | Retrieval-augmented answer |
//! | `POST` | `/api/direct-chat` | Answer without retrieval |
//!
//! # Error Contract
//!
//! Error responses carry a machine-readable code and a human-readable
//! message:
//!
//! ```json
//! { "error": { "code": "empty_question", "message": "No question provided" } }
//! ```
//!
//! Error codes: `empty_question` (400), `document_unavailable` (500).
//! Completion-service failures are never error responses — they surface as
//! `200` answers with `"source": "Local Knowledge Base"`.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so the bundled web
//! frontend can be served from anywhere.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::engine::{ChatEngine, ChatError};
use crate::models::ChatExchange;

/// Starts the HTTP server on the configured bind address. Runs until the
/// process is terminated.
pub async fn run_server(config: &Config, engine: Arc<ChatEngine>) -> anyhow::Result<()> {
    let app = router(engine);

    println!("AlgoMate API listening on http://{}", config.server.bind);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the application router. Separated from [`run_server`] so tests
/// can drive the routes without binding a socket.
pub fn router(engine: Arc<ChatEngine>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(handle_health))
        .route("/api/chat", post(handle_chat))
        .route("/api/direct-chat", post(handle_direct_chat))
        .layer(cors)
        .with_state(engine)
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::EmptyQuestion => AppError {
                status: StatusCode::BAD_REQUEST,
                code: "empty_question".to_string(),
                message: err.to_string(),
            },
            ChatError::DocumentUnavailable(_) => AppError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "document_unavailable".to_string(),
                message: err.to_string(),
            },
        }
    }
}

// ============ GET /api/health ============

/// JSON response body for `GET /api/health`.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    rag_status: String,
    rag_message: String,
}

/// Handler for `GET /api/health`.
///
/// Re-runs document initialization and reports whether the retrieval
/// subsystem is usable. The server itself is always `"healthy"` — chat
/// still works through the fallback responder when retrieval is not.
async fn handle_health(State(engine): State<Arc<ChatEngine>>) -> Json<HealthResponse> {
    let status = engine.initialize();
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "AlgoMate API".to_string(),
        rag_status: if status.ok { "initialized" } else { "error" }.to_string(),
        rag_message: status.message,
    })
}

// ============ POST /api/chat, /api/direct-chat ============

/// JSON request body for the chat endpoints.
#[derive(Deserialize)]
struct ChatRequest {
    #[serde(default)]
    question: String,
}

/// JSON response body for the chat endpoints. `relevant_chunks` is present
/// only on the retrieval-augmented path.
#[derive(Serialize)]
struct ChatResponse {
    question: String,
    answer: String,
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    relevant_chunks: Option<usize>,
}

impl From<ChatExchange> for ChatResponse {
    fn from(exchange: ChatExchange) -> Self {
        let source = exchange.source_label().to_string();
        Self {
            question: exchange.question,
            answer: exchange.answer,
            source,
            relevant_chunks: exchange.relevant_chunks,
        }
    }
}

/// Handler for `POST /api/chat`.
async fn handle_chat(
    State(engine): State<Arc<ChatEngine>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let exchange = engine.answer_question(&request.question).await?;
    Ok(Json(exchange.into()))
}

/// Handler for `POST /api/direct-chat`.
async fn handle_direct_chat(
    State(engine): State<Arc<ChatEngine>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let exchange = engine.answer_directly(&request.question).await?;
    Ok(Json(exchange.into()))
}
