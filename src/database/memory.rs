// In-memory storage backend.
//
// Development-mode fallback, not a production contract: records live in
// vectors behind RwLocks owned by the store object, so every instance is an
// isolated universe (which is exactly what tests want).

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::password;
use crate::database::models::{Todo, User};
use crate::database::store::{
    NewTodo, NewUser, StoreError, TodoPatch, TodoStore, UserPatch, UserStore,
};
use crate::types::RecordId;

pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
    next_id: AtomicI64,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        let hashed = password::hash_password(&new.password)?;

        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == new.email) {
            return Err(StoreError::DuplicateEmail(new.email));
        }

        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            object_id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password: hashed,
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn get(&self, id: &RecordId) -> Result<User, StoreError> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| u.matches(id))
            .cloned()
            .ok_or(StoreError::NotFound("User"))
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn update(&self, id: &RecordId, patch: UserPatch) -> Result<User, StoreError> {
        // Hash outside the write lock
        let hashed = match &patch.password {
            Some(raw) => Some(password::hash_password(raw)?),
            None => None,
        };

        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.matches(id))
            .ok_or(StoreError::NotFound("User"))?;

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(hashed) = hashed {
            user.password = hashed;
        }

        Ok(user.clone())
    }

    async fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let position = users
            .iter()
            .position(|u| u.matches(id))
            .ok_or(StoreError::NotFound("User"))?;

        users.remove(position);
        Ok(())
    }

    async fn authenticate(&self, email: &str, raw_password: &str) -> Result<User, StoreError> {
        let user = {
            let users = self.users.read().await;
            users
                .iter()
                .find(|u| u.email == email)
                .cloned()
                .ok_or(StoreError::InvalidCredential)?
        };

        if password::verify_password(raw_password, &user.password)? {
            Ok(user)
        } else {
            Err(StoreError::InvalidCredential)
        }
    }
}

pub struct MemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
    next_id: AtomicI64,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn create(&self, caller: Option<&RecordId>, new: NewTodo) -> Result<Todo, StoreError> {
        // Caller identity wins over the explicit owner field
        let owner = caller.copied().or(new.user_id);

        let todo = Todo {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            object_id: Uuid::new_v4(),
            user_id: owner,
            title: new.title,
            description: new.description,
            completed: false,
        };

        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn get(&self, id: &RecordId, caller: Option<&RecordId>) -> Result<Todo, StoreError> {
        let todos = self.todos.read().await;
        let todo = todos
            .iter()
            .find(|t| t.matches(id))
            .ok_or(StoreError::NotFound("Todo"))?;

        if let Some(caller) = caller {
            if !todo.owned_by(caller) {
                return Err(StoreError::Forbidden);
            }
        }

        Ok(todo.clone())
    }

    async fn list(&self, caller: Option<&RecordId>) -> Result<Vec<Todo>, StoreError> {
        let todos = self.todos.read().await;
        Ok(match caller {
            Some(caller) => todos.iter().filter(|t| t.owned_by(caller)).cloned().collect(),
            None => todos.clone(),
        })
    }

    async fn update(
        &self,
        id: &RecordId,
        patch: TodoPatch,
        caller: Option<&RecordId>,
    ) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.matches(id))
            .ok_or(StoreError::NotFound("Todo"))?;

        if let Some(caller) = caller {
            if !todo.owned_by(caller) {
                return Err(StoreError::Forbidden);
            }
        }

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(description) = patch.description {
            todo.description = description;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }

        Ok(todo.clone())
    }

    async fn delete(&self, id: &RecordId, caller: Option<&RecordId>) -> Result<(), StoreError> {
        let mut todos = self.todos.write().await;
        let position = todos
            .iter()
            .position(|t| t.matches(id))
            .ok_or(StoreError::NotFound("Todo"))?;

        if let Some(caller) = caller {
            if !todos[position].owned_by(caller) {
                return Err(StoreError::Forbidden);
            }
        }

        todos.remove(position);
        Ok(())
    }
}
