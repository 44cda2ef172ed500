use crate::modules::posts::core::post::{Post, PostId};
use std::str::FromStr;

/// How a new post's id is derived from the ids already stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostIdPolicy {
    /// `max(ids)`. Collides with the current maximum; undefined on an empty
    /// collection.
    #[default]
    CurrentMax,
    /// `max(ids) + 1`, starting at 1.
    NextAfterMax,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdPolicyError {
    #[error("cannot derive an id from an empty collection")]
    EmptyCollection,

    #[error("unknown id policy: {0}")]
    Unknown(String),
}

impl PostIdPolicy {
    pub fn assign(self, posts: &[Post]) -> Result<PostId, IdPolicyError> {
        let max = posts.iter().map(|p| p.id).max();
        match (self, max) {
            (PostIdPolicy::CurrentMax, Some(max)) => Ok(max),
            (PostIdPolicy::CurrentMax, None) => Err(IdPolicyError::EmptyCollection),
            (PostIdPolicy::NextAfterMax, Some(max)) => Ok(max.saturating_add(1)),
            (PostIdPolicy::NextAfterMax, None) => Ok(1),
        }
    }
}

impl FromStr for PostIdPolicy {
    type Err = IdPolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "current-max" => Ok(PostIdPolicy::CurrentMax),
            "next-after-max" => Ok(PostIdPolicy::NextAfterMax),
            other => Err(IdPolicyError::Unknown(other.to_string())),
        }
    }
}
