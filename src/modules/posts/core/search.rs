use crate::modules::posts::core::post::{Post, PostId};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Content,
}

impl SearchField {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "title" => Some(SearchField::Title),
            "content" => Some(SearchField::Content),
            _ => None,
        }
    }

    fn haystack(self, post: &Post) -> &str {
        match self {
            SearchField::Title => &post.title,
            SearchField::Content => &post.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    pub field: SearchField,
    pub phrase: String,
}

impl SearchTerm {
    fn matches(&self, post: &Post) -> bool {
        self.field
            .haystack(post)
            .to_lowercase()
            .contains(&self.phrase.to_lowercase())
    }
}

/// Union of the posts matched by each term, in term order then stored order.
/// A post matched by several terms appears once, where it was first matched.
pub fn search_posts(posts: &[Post], terms: &[SearchTerm]) -> Vec<Post> {
    let mut seen: HashSet<PostId> = HashSet::new();
    let mut results = Vec::new();
    for term in terms {
        for post in posts.iter().filter(|p| term.matches(p)) {
            if seen.insert(post.id) {
                results.push(post.clone());
            }
        }
    }
    results
}
