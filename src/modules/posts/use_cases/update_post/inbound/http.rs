use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
};

use crate::modules::posts::application::errors::ApplicationError;
use crate::modules::posts::use_cases::update_post::command::UpdatePost;
use crate::shared::infrastructure::payload::decode_payload;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApplicationError> {
    let command = decode_payload::<UpdatePost>(&headers, &body);
    let post = state.update_post.handle(&id, command).await?;
    Ok(Json(post))
}
