use serde::Deserialize;

/// Body of a create request. Both fields are required and must be non-empty.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CreatePost {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPost {
    pub title: String,
    pub content: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CreatePostError {
    #[error("title is missing or empty")]
    MissingTitle,

    #[error("content is missing or empty")]
    MissingContent,
}

impl CreatePost {
    pub fn validate(self) -> Result<ValidPost, CreatePostError> {
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .ok_or(CreatePostError::MissingTitle)?;
        let content = self
            .content
            .filter(|c| !c.is_empty())
            .ok_or(CreatePostError::MissingContent)?;
        Ok(ValidPost { title, content })
    }
}
