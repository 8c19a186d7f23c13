// handlers/users/list.rs - GET /users handler

use axum::extract::State;

use crate::database::models::User;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /users - list all user accounts (password hashes stripped)
pub async fn user_list(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    let users = state.users.list().await?;
    Ok(ApiResponse::success(users))
}
