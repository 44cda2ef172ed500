// Shared test fixtures for posts.

use crate::modules::posts::core::post::{Post, PostId};
use crate::modules::posts::core::seed::fixture_posts;

pub fn seed_posts() -> Vec<Post> {
    fixture_posts()
}

pub struct PostBuilder {
    inner: Post,
}

impl Default for PostBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PostBuilder {
    pub fn new() -> Self {
        Self {
            inner: Post {
                id: 1,
                title: "A title".to_string(),
                content: "Some content".to_string(),
            },
        }
    }

    pub fn id(mut self, v: PostId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn build(self) -> Post {
        self.inner
    }
}

#[cfg(test)]
mod post_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let post = PostBuilder::default()
            .id(42)
            .title("Custom")
            .content("Body")
            .build();

        assert_eq!(post.id, 42);
        assert_eq!(post.title, "Custom");
        assert_eq!(post.content, "Body");
    }
}
