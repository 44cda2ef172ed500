// In memory implementation of the PostRepository port.
//
// Purpose
// - Hold the post collection for the running service and for tests.
//
// Responsibilities
// - Keep posts in insertion order.
// - Resolve ids to the first matching post, since ids are not guaranteed unique.

use crate::modules::posts::adapters::outbound::post_repository::{
    PostRepository, RepositoryError,
};
use crate::modules::posts::core::post::{Post, PostId, PostPatch};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
    is_offline: bool,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Post repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.posts.read().await.clone())
    }

    async fn append(&self, post: Post) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.posts.write().await.push(post);
        Ok(())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.posts.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn update_by_id(
        &self,
        id: PostId,
        patch: PostPatch,
    ) -> Result<Option<Post>, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.posts.write().await;
        let Some(post) = guard.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        patch.apply_to(post);
        Ok(Some(post.clone()))
    }

    async fn remove_by_id(&self, id: PostId) -> Result<Option<Post>, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.posts.write().await;
        Ok(guard
            .iter()
            .position(|p| p.id == id)
            .map(|index| guard.remove(index)))
    }
}
