use crate::modules::posts::adapters::outbound::post_repository::RepositoryError;
use crate::modules::posts::core::id_policy::IdPolicyError;
use crate::modules::posts::core::post::InvalidPostId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("post {0} not found")]
    NotFound(String),

    #[error(transparent)]
    IdAssignment(#[from] IdPolicyError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<InvalidPostId> for ApplicationError {
    fn from(error: InvalidPostId) -> Self {
        ApplicationError::BadRequest(error.to_string())
    }
}
