// handlers/todos/mod.rs - To-do handlers
//
// Every route in this group sits behind the bearer-token guard; handlers
// read the resolved identity from the request extensions and pass it to the
// store, which scopes access to the owning user.

pub mod create; // POST /todos
pub mod delete; // DELETE /todos/:id
pub mod list; // GET /todos
pub mod show; // GET /todos/:id
pub mod update; // PUT /todos/:id

pub use create::todo_create;
pub use delete::todo_delete;
pub use list::todo_list;
pub use show::todo_show;
pub use update::todo_update;
