use crate::modules::posts::adapters::outbound::post_repository::PostRepository;
use crate::modules::posts::application::errors::ApplicationError;
use crate::modules::posts::core::id_policy::PostIdPolicy;
use crate::modules::posts::core::post::Post;
use crate::modules::posts::use_cases::create_post::command::CreatePost;
use std::sync::Arc;

pub struct CreatePostHandler {
    repository: Arc<dyn PostRepository>,
    id_policy: PostIdPolicy,
}

impl CreatePostHandler {
    pub fn new(repository: Arc<dyn PostRepository>, id_policy: PostIdPolicy) -> Self {
        Self {
            repository,
            id_policy,
        }
    }

    /// Reads the current ids, then appends. The two steps are not atomic, so
    /// concurrent creates may be handed the same id.
    pub async fn handle(&self, command: CreatePost) -> Result<Post, ApplicationError> {
        let valid = command
            .validate()
            .map_err(|e| ApplicationError::BadRequest(e.to_string()))?;
        let existing = self.repository.list().await?;
        let id = self.id_policy.assign(&existing)?;
        let post = Post {
            id,
            title: valid.title,
            content: valid.content,
        };
        self.repository.append(post.clone()).await?;
        tracing::info!(post_id = post.id, "post created");
        Ok(post)
    }
}
