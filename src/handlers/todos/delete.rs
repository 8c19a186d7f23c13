// handlers/todos/delete.rs - DELETE /todos/:id handler

use axum::extract::{Path, State};
use axum::Extension;

use crate::handlers::record_id;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// DELETE /todos/:id - 204 on success; a missing id is 404 regardless of
/// who asks, a foreign record is 403
pub async fn todo_delete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = record_id(&id)?;
    state.todos.delete(&id, Some(&auth.user_id)).await?;

    Ok(ApiResponse::<()>::no_content())
}
