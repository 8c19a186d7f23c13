mod common;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "x-test-boundary-7MA4YWxkTrZu0gW";

fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

async fn post_multipart(
    app: &axum::Router,
    token: Option<&str>,
    body: Vec<u8>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/users/avatar")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let response = app.clone().oneshot(builder.body(Body::from(body))?).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}

// A single sequential flow: the upload directory override must be in place
// before anything touches the config singleton, so the scenarios share one
// test body instead of racing in parallel.
#[tokio::test]
async fn avatar_upload_flow() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::env::set_var("UPLOAD_DIR", dir.path());

    let app = common::test_app();

    // No token is 401, a bad token is 403
    let (status, _) =
        post_multipart(&app, None, multipart_body("avatar", "me.png", b"bytes")).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = post_multipart(
        &app,
        Some("bogus-token"),
        multipart_body("avatar", "me.png", b"bytes"),
    )
    .await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (user, token) = common::signup_and_login(&app, "Ann", "a@x.com", "secret1").await?;

    // A form without the avatar field is rejected
    let (status, body) = post_multipart(
        &app,
        Some(&token),
        multipart_body("attachment", "me.png", b"bytes"),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No file uploaded");

    // A proper upload lands on disk under a timestamped name
    let content = b"\x89PNG\r\n\x1a\nfake image bytes";
    let (status, body) =
        post_multipart(&app, Some(&token), multipart_body("avatar", "me.png", content)).await?;

    assert_eq!(status, StatusCode::OK, "unexpected body: {}", body);
    assert_eq!(body["message"], "Avatar uploaded successfully");
    assert_eq!(body["userId"], user["objectId"]);

    let filename = body["file"].as_str().expect("file name");
    assert!(filename.starts_with("avatar-"), "got {}", filename);
    assert!(filename.ends_with(".png"), "got {}", filename);

    let stored = std::fs::read(dir.path().join(filename))?;
    assert_eq!(stored, content);

    Ok(())
}
