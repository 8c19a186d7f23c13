// handlers/users/mod.rs - User account handlers
//
// User CRUD and login are public; the avatar upload requires a bearer token.

pub mod avatar; // POST /users/avatar
pub mod create; // POST /users
pub mod delete; // DELETE /users/:id
pub mod list; // GET /users
pub mod login; // POST /users/login
pub mod show; // GET /users/:id
pub mod update; // PUT /users/:id

pub use avatar::avatar_post;
pub use create::user_create;
pub use delete::user_delete;
pub use list::user_list;
pub use login::login_post;
pub use show::user_show;
pub use update::user_update;
