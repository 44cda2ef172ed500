use crate::modules::posts::adapters::outbound::post_repository::PostRepository;
use crate::modules::posts::application::errors::ApplicationError;
use crate::modules::posts::core::ordering::{SortOrder, sort_posts};
use crate::modules::posts::core::post::Post;
use std::sync::Arc;

pub struct ListPostsHandler {
    repository: Arc<dyn PostRepository>,
}

impl ListPostsHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    /// Stored order without a sort order, sorted otherwise.
    pub async fn handle(&self, order: Option<SortOrder>) -> Result<Vec<Post>, ApplicationError> {
        let posts = self.repository.list().await?;
        Ok(match order {
            Some(order) => sort_posts(posts, order),
            None => posts,
        })
    }
}
