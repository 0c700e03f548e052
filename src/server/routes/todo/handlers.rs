use super::extract::TodoPayload;
use crate::db::{InsertOutcome, TodoStore};
use crate::error::CruderError;
use crate::server::router::CruderState;
use axum::{Json, extract::State};
use cruder_query::{Fields, TODO_TABLE, insert_statement, read_filter, select_statement};

/// POST /todo/create
///
/// Inserts one row built from the payload's keys and values and returns the
/// database's insert outcome unchanged.
pub(super) async fn todo_create_handler(
    State(state): State<CruderState>,
    TodoPayload(fields): TodoPayload,
) -> Result<Json<InsertOutcome>, CruderError> {
    let statement = insert_statement(TODO_TABLE, &fields);
    let outcome = state.store.execute(statement).await?;
    Ok(Json(outcome))
}

/// POST /todo/read
pub(super) async fn todo_read_handler(
    State(state): State<CruderState>,
    TodoPayload(fields): TodoPayload,
) -> Result<Json<Vec<Fields>>, CruderError> {
    let filter = read_filter(&fields)?;
    let statement = select_statement(TODO_TABLE, filter);
    let rows = state.store.fetch_rows(statement).await?;
    Ok(Json(rows))
}
