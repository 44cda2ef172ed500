use serde::{Deserialize, Serialize};

pub type PostId = u64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
}

/// Field overrides carried by an update. `None` and empty strings leave the
/// stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title.filter(|t| !t.is_empty()) {
            post.title = title;
        }
        if let Some(content) = self.content.filter(|c| !c.is_empty()) {
            post.content = content;
        }
    }
}

/// Parses an id path segment. Only ASCII digits are accepted; `Ok(None)`
/// means the segment is well formed but too large to name any post.
pub fn parse_post_id(raw: &str) -> Result<Option<PostId>, InvalidPostId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidPostId(raw.to_string()));
    }
    Ok(raw.parse::<PostId>().ok())
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid post id: {0:?}")]
pub struct InvalidPostId(pub String);
