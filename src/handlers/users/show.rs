// handlers/users/show.rs - GET /users/:id handler

use axum::extract::{Path, State};

use crate::database::models::User;
use crate::handlers::record_id;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /users/:id - show a single user by serial id or object id
pub async fn user_show(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<User> {
    let id = record_id(&id)?;
    let user = state.users.get(&id).await?;

    Ok(ApiResponse::success(user))
}
