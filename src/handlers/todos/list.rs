// handlers/todos/list.rs - GET /todos handler

use axum::extract::State;
use axum::Extension;

use crate::database::models::Todo;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /todos - list the authenticated user's todos
pub async fn todo_list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Vec<Todo>> {
    let todos = state.todos.list(Some(&auth.user_id)).await?;
    Ok(ApiResponse::success(todos))
}
