use crate::modules::posts::adapters::outbound::post_repository::PostRepository;
use crate::modules::posts::application::errors::ApplicationError;
use crate::modules::posts::core::post::{Post, PostId, parse_post_id};
use crate::modules::posts::use_cases::update_post::command::UpdatePost;
use crate::shared::infrastructure::payload::PayloadError;
use std::sync::Arc;

pub struct UpdatePostHandler {
    repository: Arc<dyn PostRepository>,
}

impl UpdatePostHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    /// Checks run in order: id format, existence, body. A bad body on an
    /// unknown id therefore reports the missing post.
    pub async fn handle(
        &self,
        raw_id: &str,
        command: Result<UpdatePost, PayloadError>,
    ) -> Result<Post, ApplicationError> {
        let id = self.existing_id(raw_id).await?;
        let command = command.map_err(|e| ApplicationError::BadRequest(e.to_string()))?;
        let updated = self
            .repository
            .update_by_id(id, command.into())
            .await?
            .ok_or_else(|| ApplicationError::NotFound(raw_id.to_string()))?;
        tracing::info!(post_id = id, "post updated");
        Ok(updated)
    }

    async fn existing_id(&self, raw_id: &str) -> Result<PostId, ApplicationError> {
        let not_found = || ApplicationError::NotFound(raw_id.to_string());
        let id = parse_post_id(raw_id)?.ok_or_else(not_found)?;
        self.repository.find_by_id(id).await?.ok_or_else(not_found)?;
        Ok(id)
    }
}
