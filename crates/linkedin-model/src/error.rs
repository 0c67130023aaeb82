use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("the response has no access_token field")]
    MissingAccessToken,

    #[error("id error: {0}")]
    Id(#[from] crate::IdError),
}

pub type ModelResult<T> = Result<T, ModelError>;
