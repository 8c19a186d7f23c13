use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::state::AppState;
use crate::types::RecordId;

pub mod todos;
pub mod users;

/// Resolve a raw `:id` path segment once, at the API boundary.
pub(crate) fn record_id(raw: &str) -> Result<RecordId, ApiError> {
    RecordId::parse(raw).ok_or_else(|| ApiError::bad_request("Invalid identifier format"))
}

/// GET / - service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Todo API (Rust)",
        "version": version,
        "endpoints": {
            "users": "POST/GET /users, GET/PUT/DELETE /users/:id (public)",
            "login": "POST /users/login (public - token acquisition)",
            "avatar": "POST /users/avatar (bearer)",
            "todos": "POST/GET /todos, GET/PUT/DELETE /todos/:id (bearer)",
            "health": "GET /health (public)",
        }
    }))
}

/// GET /health - liveness plus backend connectivity
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    let database = match &state.pool {
        Some(pool) => DatabaseManager::health_check(pool).await.err(),
        None => None,
    };

    match database {
        None => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
            })),
        ),
        Some(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string(),
            })),
        ),
    }
}
