use crate::modules::posts::adapters::outbound::post_repository::PostRepository;
use crate::modules::posts::core::id_policy::PostIdPolicy;
use crate::modules::posts::use_cases::create_post::handler::CreatePostHandler;
use crate::modules::posts::use_cases::delete_post::handler::DeletePostHandler;
use crate::modules::posts::use_cases::list_posts::handler::ListPostsHandler;
use crate::modules::posts::use_cases::search_posts::handler::SearchPostsHandler;
use crate::modules::posts::use_cases::update_post::handler::UpdatePostHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_posts: Arc<ListPostsHandler>,
    pub search_posts: Arc<SearchPostsHandler>,
    pub create_post: Arc<CreatePostHandler>,
    pub update_post: Arc<UpdatePostHandler>,
    pub delete_post: Arc<DeletePostHandler>,
}

impl AppState {
    /// Wires every use case to the same repository.
    pub fn new(repository: Arc<dyn PostRepository>, id_policy: PostIdPolicy) -> Self {
        Self {
            list_posts: Arc::new(ListPostsHandler::new(repository.clone())),
            search_posts: Arc::new(SearchPostsHandler::new(repository.clone())),
            create_post: Arc::new(CreatePostHandler::new(repository.clone(), id_policy)),
            update_post: Arc::new(UpdatePostHandler::new(repository.clone())),
            delete_post: Arc::new(DeletePostHandler::new(repository)),
        }
    }
}
