use crate::error::CruderError;
use crate::utils::logging::debug_pretty_json;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use cruder_query::{Fields, decode_form_key};
use tracing::debug;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// JSON object carried in the first key of a form-encoded body.
pub(crate) struct TodoPayload(pub(crate) Fields);

impl<S> FromRequest<S> for TodoPayload
where
    S: Send + Sync,
{
    type Rejection = CruderError;

    /// Decode the form key of a `/todo/*` request.
    ///
    /// Bodies sent with any other content type are treated as having no keys,
    /// so they fail the same way an empty form does.
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with(FORM_URLENCODED));

        let body = Bytes::from_request(req, state).await?;
        let form: &[u8] = if is_form { &body } else { &[] };
        let fields = decode_form_key(form)?;

        debug_pretty_json(&fields, |pretty_body| {
            debug!(body = %pretty_body, "Decoded todo payload");
        });

        Ok(Self(fields))
    }
}
