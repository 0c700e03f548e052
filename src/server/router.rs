use crate::db::TodoStore;
use crate::server::routes::{index, todo};

use axum::{
    Router,
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::USER_AGENT},
    middleware::{self, Next},
    response::Response,
};
use base64::Engine as _;
use rand::RngCore;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Client-supplied id when usable, else 12 random bytes as 16 base64url chars.
fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map_or_else(
            || {
                let mut bytes = [0u8; 12];
                rand::rng().fill_bytes(&mut bytes);
                base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
            },
            str::to_string,
        )
}

#[derive(Clone)]
pub struct CruderState {
    /// The one database handle shared by every request.
    pub store: Arc<dyn TodoStore>,
    pub index_file: PathBuf,
}

impl CruderState {
    pub fn new(store: Arc<dyn TodoStore>, index_file: impl Into<PathBuf>) -> Self {
        Self {
            store,
            index_file: index_file.into(),
        }
    }
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn access_log(req: Request, next: Next) -> Response {
    let request_id = resolve_request_id(req.headers());
    let line = format!(
        "{} {} {:?} \"{}\"",
        req.method(),
        req.uri().path(),
        req.version(),
        req.headers()
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-"),
    );

    let start = Instant::now();
    let mut resp = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status().as_u16();
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    match status {
        500.. => error!(%request_id, status, elapsed_ms, "{line}"),
        400..=499 => warn!(%request_id, status, elapsed_ms, "{line}"),
        _ => info!(%request_id, status, elapsed_ms, "{line}"),
    }

    resp
}

pub fn cruder_router(state: CruderState) -> Router {
    let index = index::router(&state.index_file);

    Router::new()
        .merge(index)
        .merge(todo::router())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}
