use thiserror::Error;

#[derive(Debug, Error)]
pub enum CirclError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CIRCL returned error ({status}): {body}")]
    ApiError {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Unexpected error: {0}")]
    Other(String),
}
