use crate::modules::posts::core::post::Post;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Title,
    Content,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortField {
    /// Unknown or missing values fall back to `title`.
    pub fn lenient(raw: Option<&str>) -> Self {
        match raw {
            Some("content") => SortField::Content,
            _ => SortField::Title,
        }
    }

    fn key(self, post: &Post) -> &str {
        match self {
            SortField::Title => &post.title,
            SortField::Content => &post.content,
        }
    }
}

impl SortDirection {
    /// Unknown or missing values fall back to `desc`.
    pub fn lenient(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

impl SortOrder {
    pub fn lenient(sort: Option<&str>, direction: Option<&str>) -> Self {
        Self {
            field: SortField::lenient(sort),
            direction: SortDirection::lenient(direction),
        }
    }

    fn compare(self, a: &Post, b: &Post) -> Ordering {
        let ordering = self.field.key(a).cmp(self.field.key(b));
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Stable in both directions: posts with equal keys keep their stored order.
pub fn sort_posts(mut posts: Vec<Post>, order: SortOrder) -> Vec<Post> {
    posts.sort_by(|a, b| order.compare(a, b));
    posts
}
