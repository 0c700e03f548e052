//! SQL DDL run once when the connection opens.
//! Idempotent bootstrap only; existing tables are left as they are.

/// SQLite schema includes:
/// - `todo` table (open column set in practice; SQLite accepts any value type per column)
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS todo (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NULL,
    done INTEGER NULL
);
"#;
