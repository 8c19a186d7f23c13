// handlers/todos/show.rs - GET /todos/:id handler

use axum::extract::{Path, State};
use axum::Extension;

use crate::database::models::Todo;
use crate::handlers::record_id;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /todos/:id - show a single todo; 404 when absent, 403 when the
/// record belongs to another user
pub async fn todo_show(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Todo> {
    let id = record_id(&id)?;
    let todo = state.todos.get(&id, Some(&auth.user_id)).await?;

    Ok(ApiResponse::success(todo))
}
