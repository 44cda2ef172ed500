use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::modules::posts::application::errors::ApplicationError;
use crate::modules::posts::use_cases::create_post::command::CreatePost;
use crate::shared::infrastructure::payload::decode_payload;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApplicationError> {
    let command: CreatePost = decode_payload(&headers, &body)
        .map_err(|e| ApplicationError::BadRequest(e.to_string()))?;
    let post = state.create_post.handle(command).await?;
    Ok((StatusCode::CREATED, Json(post)))
}
