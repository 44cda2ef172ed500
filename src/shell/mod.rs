// Composition root for the posts service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory post repository.
// - Wire the repository into the use case handlers and the HTTP router.

pub mod config;
pub mod http;
pub mod state;

use crate::modules::posts::adapters::outbound::post_repository_in_memory::InMemoryPostRepository;
use crate::modules::posts::core::seed::fixture_posts;
use crate::shell::config::ServerConfig;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn build_state(config: &ServerConfig) -> AppState {
    let posts = if config.seed { fixture_posts() } else { Vec::new() };
    let repository = Arc::new(InMemoryPostRepository::with_posts(posts));
    AppState::new(repository, config.id_policy)
}
