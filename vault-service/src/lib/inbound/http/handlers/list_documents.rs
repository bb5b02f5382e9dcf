use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::document::DocumentSummary;
use crate::inbound::http::router::AppState;
use crate::user::models::AuthenticatedUser;

pub async fn list_documents(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<DocumentsResponseData>, ApiError> {
    let documents = state.document_service.list().map_err(ApiError::from)?;

    Ok(Json(DocumentsResponseData {
        documents,
        user_requesting: user.username.to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentsResponseData {
    pub documents: Vec<DocumentSummary>,
    pub user_requesting: String,
}
