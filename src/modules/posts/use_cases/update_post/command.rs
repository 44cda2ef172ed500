use crate::modules::posts::core::post::PostPatch;
use serde::Deserialize;

/// Body of an update request; every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct UpdatePost {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<UpdatePost> for PostPatch {
    fn from(command: UpdatePost) -> Self {
        PostPatch {
            title: command.title,
            content: command.content,
        }
    }
}
