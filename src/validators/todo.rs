use serde::Deserialize;

use super::FieldErrors;
use crate::database::store::{NewTodo, TodoPatch};
use crate::error::ApiError;
use crate::types::RecordId;

const TITLE_MIN_LEN: usize = 2;

/// POST /todos body.
///
/// `userId` is only honored when the store receives no caller identity
/// (unauthenticated legacy mode); an authenticated caller always owns the
/// todo they create.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<RecordId>,
}

impl CreateTodoRequest {
    /// Title >= 2 chars and description required.
    pub fn validate(self) -> Result<NewTodo, ApiError> {
        let mut errors = FieldErrors::new();

        match &self.title {
            Some(title) if title.chars().count() >= TITLE_MIN_LEN => {}
            Some(_) => errors.add("title", "title must be at least 2 characters"),
            None => errors.add("title", "title is required"),
        }

        if self.description.is_none() {
            errors.add("description", "description is required");
        }

        errors.into_result()?;

        Ok(NewTodo {
            user_id: self.user_id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        })
    }
}

/// PUT /todos/:id body; only provided fields are replaced
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl From<UpdateTodoRequest> for TodoPatch {
    fn from(req: UpdateTodoRequest) -> Self {
        TodoPatch {
            title: req.title,
            description: req.description,
            completed: req.completed,
        }
    }
}
