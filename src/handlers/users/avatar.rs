// handlers/users/avatar.rs - POST /users/avatar handler (bearer)

use std::path::Path as FsPath;

use axum::extract::Multipart;
use axum::Extension;
use serde_json::{json, Value};

use crate::config;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};

/// POST /users/avatar - store an uploaded avatar image.
///
/// Expects a multipart form with an `avatar` file part. The file lands in
/// the configured upload directory under a timestamped name; the response
/// echoes the stored filename and the authenticated user id.
pub async fn avatar_post(
    Extension(auth): Extension<AuthUser>,
    mut multipart: Multipart,
) -> ApiResult<Value> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("avatar") {
            continue;
        }

        let extension = field
            .file_name()
            .and_then(|name| FsPath::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;

        let filename = format!("avatar-{}{}", chrono::Utc::now().timestamp_millis(), extension);
        let upload_dir = &config::config().storage.upload_dir;

        tokio::fs::create_dir_all(upload_dir).await.map_err(|e| {
            tracing::error!("failed to create upload directory {}: {}", upload_dir, e);
            ApiError::internal_server_error("Failed to store upload")
        })?;

        let path = FsPath::new(upload_dir).join(&filename);
        tokio::fs::write(&path, &bytes).await.map_err(|e| {
            tracing::error!("failed to write upload {}: {}", path.display(), e);
            ApiError::internal_server_error("Failed to store upload")
        })?;

        return Ok(ApiResponse::success(json!({
            "message": "Avatar uploaded successfully",
            "file": filename,
            "userId": auth.user_id,
        })));
    }

    Err(ApiError::bad_request("No file uploaded"))
}
