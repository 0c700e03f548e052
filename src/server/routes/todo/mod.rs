use crate::server::router::CruderState;
use axum::{Router, routing::post};

pub mod extract;
pub mod handlers;

pub fn router() -> Router<CruderState> {
    Router::new()
        .route("/todo/create", post(handlers::todo_create_handler))
        .route("/todo/read", post(handlers::todo_read_handler))
}
