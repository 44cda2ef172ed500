use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::posts::application::errors::ApplicationError;
use crate::modules::posts::use_cases::delete_post::handler::deleted_message;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeletePostResponse {
    pub message: String,
}

/// Serves both `DELETE /api/posts/{id}` and `DELETE /api/posts/{id}/delete`.
pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let removed = state.delete_post.handle(&id).await?;
    Ok(Json(DeletePostResponse {
        message: deleted_message(&removed),
    }))
}
