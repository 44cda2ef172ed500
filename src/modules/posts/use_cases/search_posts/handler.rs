use crate::modules::posts::adapters::outbound::post_repository::PostRepository;
use crate::modules::posts::application::errors::ApplicationError;
use crate::modules::posts::core::post::Post;
use crate::modules::posts::core::search::{SearchField, SearchTerm, search_posts};
use std::sync::Arc;

pub struct SearchPostsHandler {
    repository: Arc<dyn PostRepository>,
}

impl SearchPostsHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    /// `None` returns the whole collection unfiltered.
    pub async fn handle(&self, terms: Option<Vec<SearchTerm>>) -> Result<Vec<Post>, ApplicationError> {
        let posts = self.repository.list().await?;
        Ok(match terms {
            Some(terms) => search_posts(&posts, &terms),
            None => posts,
        })
    }
}

/// Keeps the recognised keys, in the order given.
pub fn terms_from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Vec<SearchTerm> {
    pairs
        .into_iter()
        .filter_map(|(key, value)| {
            SearchField::from_key(key).map(|field| SearchTerm {
                field,
                phrase: value.to_string(),
            })
        })
        .collect()
}
