use axum::{
    Json,
    extract::{RawQuery, State},
    response::IntoResponse,
};

use crate::modules::posts::application::errors::ApplicationError;
use crate::modules::posts::core::ordering::SortOrder;
use crate::shared::infrastructure::query_string::QueryPairs;
use crate::shell::state::AppState;

/// A well-formed query always sorts, falling back to `title`/`desc`; an
/// absent or malformed one lists in stored order.
pub async fn handle(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, ApplicationError> {
    let order = QueryPairs::parse_lenient(query.as_deref())
        .map(|pairs| SortOrder::lenient(pairs.get("sort"), pairs.get("direction")));
    let posts = state.list_posts.handle(order).await?;
    Ok(Json(posts))
}
