// handlers/users/create.rs - POST /users handler

use axum::extract::State;
use axum::Json;

use crate::database::models::User;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validators::CreateUserRequest;

/// POST /users - create a user account.
///
/// 400 on failed field validation, 409 when the email is already taken. The
/// returned representation never includes the password hash.
pub async fn user_create(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> ApiResult<User> {
    let new = body.validate()?;
    let user = state.users.create(new).await?;

    Ok(ApiResponse::created(user))
}
