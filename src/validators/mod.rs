// Request validation
//
// The public API validates request bodies field by field and reports every
// failing field at once, as a map of field name to message inside a 400
// VALIDATION_ERROR response.

use std::collections::HashMap;

use crate::error::ApiError;

pub mod todo;
pub mod user;

pub use todo::{CreateTodoRequest, UpdateTodoRequest};
pub use user::{CreateUserRequest, UpdateUserRequest};

/// Accumulator for field-level validation failures
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: HashMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }

    /// Finish validation: empty means the input passed.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_error("Validation failed", Some(self.errors)))
        }
    }
}

/// Basic email format check: one '@', non-empty local and domain parts,
/// and a dot somewhere in the address.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || !email.contains('@') || !email.contains('.') {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
