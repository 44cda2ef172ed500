use crate::modules::posts::adapters::outbound::post_repository_in_memory::InMemoryPostRepository;
use crate::modules::posts::core::id_policy::PostIdPolicy;
use crate::modules::posts::core::post::Post;
use crate::shell::state::AppState;
use crate::tests::fixtures::posts::seed_posts;
use std::sync::Arc;

pub fn make_state_with(posts: Vec<Post>) -> AppState {
    AppState::new(
        Arc::new(InMemoryPostRepository::with_posts(posts)),
        PostIdPolicy::CurrentMax,
    )
}

pub fn make_test_state() -> AppState {
    make_state_with(seed_posts())
}

pub fn make_empty_state() -> AppState {
    make_state_with(Vec::new())
}

pub fn make_offline_state() -> AppState {
    let mut repository = InMemoryPostRepository::with_posts(seed_posts());
    repository.toggle_offline();
    AppState::new(Arc::new(repository), PostIdPolicy::CurrentMax)
}
