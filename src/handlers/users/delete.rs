// handlers/users/delete.rs - DELETE /users/:id handler

use axum::extract::{Path, State};

use crate::handlers::record_id;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// DELETE /users/:id - remove a user account (204, no soft-delete)
pub async fn user_delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let id = record_id(&id)?;
    state.users.delete(&id).await?;

    Ok(ApiResponse::<()>::no_content())
}
