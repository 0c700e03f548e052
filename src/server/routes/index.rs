use crate::server::router::CruderState;
use axum::{Router, routing::get_service};
use std::path::Path;
use tower_http::services::ServeFile;

/// `GET /index`: the bundled HTML client, straight from disk.
pub fn router(index_file: &Path) -> Router<CruderState> {
    Router::new().route("/index", get_service(ServeFile::new(index_file)))
}
