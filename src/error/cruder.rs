use axum::{
    body::Body,
    extract::rejection::BytesRejection,
    http::{HeaderValue, StatusCode, header::CONNECTION},
    response::{IntoResponse, Response},
};
use cruder_query::DecodeError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum CruderError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Body read error: {0}")]
    Body(#[from] BytesRejection),

    #[error("Database error: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Ractor error: {0}")]
    Actor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request boundary for every failure.
///
/// Nothing is recovered and no error payload is written: the client sees a
/// bare 500 and the connection is closed after it.
impl IntoResponse for CruderError {
    fn into_response(self) -> Response {
        let kind = match &self {
            CruderError::Decode(_) => "decode",
            CruderError::Body(_) => "body",
            CruderError::Query(_) => "query",
            CruderError::Actor(_) => "actor",
            CruderError::Io(_) => "io",
        };
        error!(kind, error = %self, "Request aborted");

        let mut resp = Response::new(Body::empty());
        *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        resp.headers_mut()
            .insert(CONNECTION, HeaderValue::from_static("close"));
        resp
    }
}
