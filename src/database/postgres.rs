// Postgres storage backend.
//
// Queries are bound at runtime against a shared pool; each operation is a
// single statement (or a read followed by one statement where the ownership
// check must distinguish 404 from 403). No multi-record transactions are
// needed anywhere in the contract.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::auth::password;
use crate::database::models::{Todo, User};
use crate::database::store::{
    NewTodo, NewUser, StoreError, TodoPatch, TodoStore, UserPatch, UserStore,
};
use crate::types::RecordId;

const UNIQUE_VIOLATION: &str = "23505";

const USER_COLUMNS: &str = "id, object_id, name, email, password";
const TODO_COLUMNS: &str = "id, object_id, user_id, title, description, completed";

/// Create the backing tables if they are missing. Idempotent, run at startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            object_id UUID NOT NULL UNIQUE,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS todos (
            id BIGSERIAL PRIMARY KEY,
            object_id UUID NOT NULL UNIQUE,
            user_id TEXT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            completed BOOLEAN NOT NULL DEFAULT FALSE
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    object_id: Uuid,
    name: String,
    email: String,
    password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            object_id: row.object_id,
            name: row.name,
            email: row.email,
            password: row.password,
        }
    }
}

#[derive(Debug, FromRow)]
struct TodoRow {
    id: i64,
    object_id: Uuid,
    /// Canonical string form of the owner's identifier, either variant
    user_id: Option<String>,
    title: String,
    description: String,
    completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id,
            object_id: row.object_id,
            user_id: row.user_id.as_deref().and_then(RecordId::parse),
            title: row.title,
            description: row.description,
            completed: row.completed,
        }
    }
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Dispatch lookup to the column matching the identifier form.
    async fn fetch(&self, id: &RecordId) -> Result<Option<UserRow>, sqlx::Error> {
        match id {
            RecordId::Serial(n) => {
                sqlx::query_as::<_, UserRow>(&format!(
                    "SELECT {} FROM users WHERE id = $1",
                    USER_COLUMNS
                ))
                .bind(n)
                .fetch_optional(&self.pool)
                .await
            }
            RecordId::Object(u) => {
                sqlx::query_as::<_, UserRow>(&format!(
                    "SELECT {} FROM users WHERE object_id = $1",
                    USER_COLUMNS
                ))
                .bind(u)
                .fetch_optional(&self.pool)
                .await
            }
        }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        let hashed = password::hash_password(&new.password)?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(&new.email)
            .fetch_one(&self.pool)
            .await?;
        if existing > 0 {
            return Err(StoreError::DuplicateEmail(new.email));
        }

        let inserted = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (object_id, name, email, password)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.email)
        .bind(&hashed)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(row) => Ok(row.into()),
            // Concurrent signup with the same email loses the unique-index race
            Err(sqlx::Error::Database(db)) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                Err(StoreError::DuplicateEmail(new.email))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get(&self, id: &RecordId) -> Result<User, StoreError> {
        self.fetch(id)
            .await?
            .map(User::from)
            .ok_or(StoreError::NotFound("User"))
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users ORDER BY id",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: &RecordId, patch: UserPatch) -> Result<User, StoreError> {
        let hashed = match &patch.password {
            Some(raw) => Some(password::hash_password(raw)?),
            None => None,
        };

        let existing = self.fetch(id).await?.ok_or(StoreError::NotFound("User"))?;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users
             SET name = COALESCE($2, name),
                 email = COALESCE($3, email),
                 password = COALESCE($4, password)
             WHERE id = $1
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(existing.id)
        .bind(&patch.name)
        .bind(&patch.email)
        .bind(&hashed)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
        let deleted = match id {
            RecordId::Serial(n) => {
                sqlx::query_scalar::<_, i64>("DELETE FROM users WHERE id = $1 RETURNING id")
                    .bind(n)
                    .fetch_optional(&self.pool)
                    .await?
            }
            RecordId::Object(u) => {
                sqlx::query_scalar::<_, i64>("DELETE FROM users WHERE object_id = $1 RETURNING id")
                    .bind(u)
                    .fetch_optional(&self.pool)
                    .await?
            }
        };

        deleted.map(|_| ()).ok_or(StoreError::NotFound("User"))
    }

    async fn authenticate(&self, email: &str, raw_password: &str) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::InvalidCredential)?;

        if password::verify_password(raw_password, &row.password)? {
            Ok(row.into())
        } else {
            Err(StoreError::InvalidCredential)
        }
    }
}

pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: &RecordId) -> Result<Option<TodoRow>, sqlx::Error> {
        match id {
            RecordId::Serial(n) => {
                sqlx::query_as::<_, TodoRow>(&format!(
                    "SELECT {} FROM todos WHERE id = $1",
                    TODO_COLUMNS
                ))
                .bind(n)
                .fetch_optional(&self.pool)
                .await
            }
            RecordId::Object(u) => {
                sqlx::query_as::<_, TodoRow>(&format!(
                    "SELECT {} FROM todos WHERE object_id = $1",
                    TODO_COLUMNS
                ))
                .bind(u)
                .fetch_optional(&self.pool)
                .await
            }
        }
    }

    /// NotFound before Forbidden, mirroring the access rules
    async fn fetch_owned(
        &self,
        id: &RecordId,
        caller: Option<&RecordId>,
    ) -> Result<TodoRow, StoreError> {
        let row = self.fetch(id).await?.ok_or(StoreError::NotFound("Todo"))?;

        if let Some(caller) = caller {
            let owner = row.user_id.as_deref().and_then(RecordId::parse);
            if owner.as_ref() != Some(caller) {
                return Err(StoreError::Forbidden);
            }
        }

        Ok(row)
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn create(&self, caller: Option<&RecordId>, new: NewTodo) -> Result<Todo, StoreError> {
        // Caller identity wins over the explicit owner field
        let owner = caller.copied().or(new.user_id);

        let row = sqlx::query_as::<_, TodoRow>(&format!(
            "INSERT INTO todos (object_id, user_id, title, description, completed)
             VALUES ($1, $2, $3, $4, FALSE)
             RETURNING {}",
            TODO_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(owner.map(|o| o.to_string()))
        .bind(&new.title)
        .bind(&new.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get(&self, id: &RecordId, caller: Option<&RecordId>) -> Result<Todo, StoreError> {
        self.fetch_owned(id, caller).await.map(Todo::from)
    }

    async fn list(&self, caller: Option<&RecordId>) -> Result<Vec<Todo>, StoreError> {
        let rows = match caller {
            Some(caller) => {
                sqlx::query_as::<_, TodoRow>(&format!(
                    "SELECT {} FROM todos WHERE user_id = $1 ORDER BY id",
                    TODO_COLUMNS
                ))
                .bind(caller.to_string())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, TodoRow>(&format!(
                    "SELECT {} FROM todos ORDER BY id",
                    TODO_COLUMNS
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn update(
        &self,
        id: &RecordId,
        patch: TodoPatch,
        caller: Option<&RecordId>,
    ) -> Result<Todo, StoreError> {
        let existing = self.fetch_owned(id, caller).await?;

        let row = sqlx::query_as::<_, TodoRow>(&format!(
            "UPDATE todos
             SET title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 completed = COALESCE($4, completed)
             WHERE id = $1
             RETURNING {}",
            TODO_COLUMNS
        ))
        .bind(existing.id)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(patch.completed)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: &RecordId, caller: Option<&RecordId>) -> Result<(), StoreError> {
        let existing = self.fetch_owned(id, caller).await?;

        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(existing.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
