use axum::extract::State;
use axum::Form;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::router::AppState;

/// OAuth2-style password login: form fields in, bearer token out.
pub async fn login(
    State(state): State<AppState>,
    Form(body): Form<LoginForm>,
) -> Result<Json<TokenResponseData>, ApiError> {
    let issued = state
        .auth_service
        .login(&body.username, &body.password)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(TokenResponseData {
        access_token: issued.access_token,
        token_type: "bearer".to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
}
