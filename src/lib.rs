pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod types;
pub mod validators;

use axum::routing::get;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::auth::jwt_auth_middleware;
use crate::state::AppState;

/// Build the full application router over the given state.
///
/// Separate from `main` so the integration tests can drive the exact
/// production router against an in-memory backend.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .merge(user_routes())
        .merge(todo_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn user_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::users;

    // Avatar upload is the one user route behind the auth gate
    let protected = Router::new()
        .route("/users/avatar", post(users::avatar_post))
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware));

    Router::new()
        // User CRUD
        .route("/users", post(users::user_create).get(users::user_list))
        .route(
            "/users/:id",
            get(users::user_show)
                .put(users::user_update)
                .delete(users::user_delete),
        )
        // Auth
        .route("/users/login", post(users::login_post))
        .merge(protected)
}

fn todo_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::todos;

    Router::new()
        // Todo CRUD
        .route("/todos", post(todos::todo_create).get(todos::todo_list))
        .route(
            "/todos/:id",
            get(todos::todo_show)
                .put(todos::todo_update)
                .delete(todos::todo_delete),
        )
        // Every todo route requires a bearer token
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware))
}
