// handlers/todos/create.rs - POST /todos handler

use axum::extract::State;
use axum::{Extension, Json};

use crate::database::models::Todo;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validators::CreateTodoRequest;

/// POST /todos - create a todo owned by the authenticated user.
///
/// The caller's identity always wins over any `userId` supplied in the body.
pub async fn todo_create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<CreateTodoRequest>,
) -> ApiResult<Todo> {
    let new = body.validate()?;
    let todo = state.todos.create(Some(&auth.user_id), new).await?;

    Ok(ApiResponse::created(todo))
}
