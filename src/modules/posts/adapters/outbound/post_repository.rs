use crate::modules::posts::core::post::{Post, PostId, PostPatch};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Storage for the post collection. Implementations keep insertion order;
/// id lookups resolve to the first post carrying the id.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Post>, RepositoryError>;
    async fn append(&self, post: Post) -> Result<(), RepositoryError>;
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepositoryError>;
    async fn update_by_id(
        &self,
        id: PostId,
        patch: PostPatch,
    ) -> Result<Option<Post>, RepositoryError>;
    async fn remove_by_id(&self, id: PostId) -> Result<Option<Post>, RepositoryError>;
}
