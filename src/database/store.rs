// Storage contract shared by the in-memory and Postgres backends.
//
// Both backends implement the same two capability sets; the concrete
// implementation is chosen once at process startup and handed to the
// application state as trait objects.

use async_trait::async_trait;
use thiserror::Error;

use crate::database::models::{Todo, User};
use crate::types::RecordId;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already in use: {0}")]
    DuplicateEmail(String),

    /// Carries the record kind ("User" / "Todo") for the client message
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("caller does not own the record")]
    Forbidden,

    #[error("invalid credentials")]
    InvalidCredential,

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Fields for user creation; `password` is the raw password, hashed by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Partial user update; absent fields are untouched. A provided password is
/// re-hashed before storage.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Fields for todo creation. `user_id` is the explicit owner field honored
/// only when no caller identity is supplied.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub user_id: Option<RecordId>,
    pub title: String,
    pub description: String,
}

/// Partial todo update; absent fields are untouched.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// User account storage: exclusive owner of User records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user. Fails with `DuplicateEmail` when the email is
    /// already present; the password is hashed before storage.
    async fn create(&self, new: NewUser) -> Result<User, StoreError>;

    async fn get(&self, id: &RecordId) -> Result<User, StoreError>;

    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Replace provided fields; absent fields are untouched.
    async fn update(&self, id: &RecordId, patch: UserPatch) -> Result<User, StoreError>;

    async fn delete(&self, id: &RecordId) -> Result<(), StoreError>;

    /// Look up by email and verify the password against the stored hash.
    /// The matched user's identity is what login embeds in the issued token.
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, StoreError>;
}

/// To-do storage: exclusive owner of Todo records. Every operation that
/// takes a caller identity scopes access to the owning user.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Persist a new todo. The owner is the caller identity when present;
    /// the explicit `user_id` field is honored only without a caller, so an
    /// authenticated caller cannot forge another identity as owner.
    async fn create(&self, caller: Option<&RecordId>, new: NewTodo) -> Result<Todo, StoreError>;

    /// `NotFound` when no record matches either identifier form; `Forbidden`
    /// when a caller identity is present and does not match the owner.
    async fn get(&self, id: &RecordId, caller: Option<&RecordId>) -> Result<Todo, StoreError>;

    /// Filtered to the caller's own records when an identity is present;
    /// unfiltered otherwise (unauthenticated legacy mode).
    async fn list(&self, caller: Option<&RecordId>) -> Result<Vec<Todo>, StoreError>;

    /// Ownership check precedes field application.
    async fn update(
        &self,
        id: &RecordId,
        patch: TodoPatch,
        caller: Option<&RecordId>,
    ) -> Result<Todo, StoreError>;

    async fn delete(&self, id: &RecordId, caller: Option<&RecordId>) -> Result<(), StoreError>;
}
