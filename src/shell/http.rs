use axum::{
    Router,
    routing::{delete, get, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::posts::use_cases::create_post::inbound::http as create_http;
use crate::modules::posts::use_cases::delete_post::inbound::http as delete_http;
use crate::modules::posts::use_cases::list_posts::inbound::http as list_http;
use crate::modules::posts::use_cases::search_posts::inbound::http as search_http;
use crate::modules::posts::use_cases::update_post::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/posts",
            get(list_http::handle).post(create_http::handle),
        )
        .route("/api/posts/search", get(search_http::handle))
        .route(
            "/api/posts/{id}",
            put(update_http::handle).delete(delete_http::handle),
        )
        .route("/api/posts/{id}/delete", delete(delete_http::handle))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
