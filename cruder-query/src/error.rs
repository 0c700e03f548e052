use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum DecodeError {
    #[error("request body has no form key")]
    EmptyBody,

    #[error("form key is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("decoded payload is a JSON {0}, expected an object")]
    NotAnObject(&'static str),

    #[error("read payload has no `where` object")]
    MissingWhere,
}
