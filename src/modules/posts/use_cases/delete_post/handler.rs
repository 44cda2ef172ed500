use crate::modules::posts::adapters::outbound::post_repository::PostRepository;
use crate::modules::posts::application::errors::ApplicationError;
use crate::modules::posts::core::post::{Post, parse_post_id};
use std::sync::Arc;

pub struct DeletePostHandler {
    repository: Arc<dyn PostRepository>,
}

impl DeletePostHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    /// Removes the first post carrying the id.
    pub async fn handle(&self, raw_id: &str) -> Result<Post, ApplicationError> {
        let not_found = || ApplicationError::NotFound(raw_id.to_string());
        let id = parse_post_id(raw_id)?.ok_or_else(not_found)?;
        let removed = self
            .repository
            .remove_by_id(id)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!(post_id = removed.id, "post deleted");
        Ok(removed)
    }
}

pub fn deleted_message(post: &Post) -> String {
    format!("Post with id <{}> has been deleted successfully.", post.id)
}
