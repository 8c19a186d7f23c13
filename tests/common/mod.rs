use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use todo_api_rust::app;
use todo_api_rust::state::AppState;

/// Fresh application router over an isolated in-memory backend
pub fn test_app() -> Router {
    app(AppState::in_memory())
}

/// Send a request, returning the status and the parsed JSON body
/// (`Value::Null` for empty bodies such as 204 responses).
pub async fn send(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}

/// Create a user account and log it in, returning the created user
/// representation and a bearer token.
#[allow(dead_code)]
pub async fn signup_and_login(
    app: &Router,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(Value, String)> {
    let (status, user) = send(
        app,
        Method::POST,
        "/users",
        Some(json!({ "name": name, "email": email, "password": password })),
        None,
    )
    .await?;
    anyhow::ensure!(status == StatusCode::CREATED, "signup failed: {}", user);

    let (status, login) = send(
        app,
        Method::POST,
        "/users/login",
        Some(json!({ "email": email, "password": password })),
        None,
    )
    .await?;
    anyhow::ensure!(status == StatusCode::OK, "login failed: {}", login);

    let token = login["token"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("missing token in {}", login))?
        .to_string();

    Ok((user, token))
}
