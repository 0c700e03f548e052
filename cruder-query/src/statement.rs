use crate::decode::Fields;
use crate::literal::{filter_literal, insert_literal};

/// Table backing the todo service.
pub const TODO_TABLE: &str = "todo";

/// Builds `INSERT INTO <table> (<columns>) VALUES (<values>)` from `fields`,
/// keeping the decoded key order for both lists.
pub fn insert_statement(table: &str, fields: &Fields) -> String {
    let columns = fields
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",");
    let values = fields
        .values()
        .map(insert_literal)
        .collect::<Vec<_>>()
        .join(",");

    format!("INSERT INTO {table} ({columns}) VALUES ({values})")
}

/// Builds `SELECT * FROM <table> WHERE (<col>=<value>,...)`.
///
/// Conditions are joined with commas, not `AND`.
pub fn select_statement(table: &str, filter: &Fields) -> String {
    let conditions = filter
        .iter()
        .map(|(column, value)| format!("{column}={}", filter_literal(value)))
        .collect::<Vec<_>>()
        .join(",");

    format!("SELECT * FROM {table} WHERE ({conditions})")
}
