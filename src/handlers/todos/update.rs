// handlers/todos/update.rs - PUT /todos/:id handler

use axum::extract::{Path, State};
use axum::{Extension, Json};

use crate::database::models::Todo;
use crate::handlers::record_id;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validators::UpdateTodoRequest;

/// PUT /todos/:id - partial field replace; the ownership check runs before
/// any field is applied
pub async fn todo_update(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTodoRequest>,
) -> ApiResult<Todo> {
    let id = record_id(&id)?;
    let todo = state
        .todos
        .update(&id, body.into(), Some(&auth.user_id))
        .await?;

    Ok(ApiResponse::success(todo))
}
