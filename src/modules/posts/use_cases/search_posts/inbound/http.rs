use axum::{
    Json,
    extract::{RawQuery, State},
    response::IntoResponse,
};

use crate::modules::posts::application::errors::ApplicationError;
use crate::modules::posts::use_cases::search_posts::handler::terms_from_pairs;
use crate::shared::infrastructure::query_string::QueryPairs;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, ApplicationError> {
    let terms = QueryPairs::parse_lenient(query.as_deref()).map(|pairs| terms_from_pairs(pairs.iter()));
    let posts = state.search_posts.handle(terms).await?;
    Ok(Json(posts))
}
