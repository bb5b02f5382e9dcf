use axum::Extension;
use axum::Json;
use serde::Serialize;

use crate::user::models::AuthenticatedUser;

pub async fn me(Extension(user): Extension<AuthenticatedUser>) -> Json<MeResponseData> {
    Json(MeResponseData {
        user: UserData {
            username: user.username.to_string(),
        },
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseData {
    pub user: UserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub username: String,
}
