// handlers/users/login.rs - POST /users/login handler

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::{self, Claims};
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /users/login - authenticate and receive a bearer token.
///
/// Unknown email and wrong password are indistinguishable to the caller
/// (both 401). On success the token embeds the matched user's identity and
/// expires a fixed window after issuance.
pub async fn login_post(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<TokenResponse> {
    let user = state.users.authenticate(&body.email, &body.password).await?;
    let token = auth::generate_jwt(Claims::new(user.identity()))?;

    Ok(ApiResponse::success(TokenResponse { token }))
}
