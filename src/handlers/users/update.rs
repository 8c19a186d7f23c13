// handlers/users/update.rs - PUT /users/:id handler

use axum::extract::{Path, State};
use axum::Json;

use crate::database::models::User;
use crate::handlers::record_id;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validators::UpdateUserRequest;

/// PUT /users/:id - partial field replace.
///
/// Provided fields overwrite the stored ones; a provided password is
/// re-hashed before storage; absent fields are untouched.
pub async fn user_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> ApiResult<User> {
    let id = record_id(&id)?;
    let patch = body.validate()?;
    let user = state.users.update(&id, patch).await?;

    Ok(ApiResponse::success(user))
}
