use base64::Engine as _;
use cruder_query::Fields;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use sqlx::sqlite::{SqliteQueryResult, SqliteRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// Result of an INSERT, written back to the client as-is.
///
/// Field names follow the OK packet shape clients of this service already parse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub affected_rows: u64,
    pub insert_id: i64,
}

impl From<SqliteQueryResult> for InsertOutcome {
    fn from(res: SqliteQueryResult) -> Self {
        Self {
            affected_rows: res.rows_affected(),
            insert_id: res.last_insert_rowid(),
        }
    }
}

/// Converts a row of unknown shape into a column -> value mapping.
///
/// The JSON type comes from each value's storage class, not the declared
/// column type. BLOBs are base64 encoded.
pub(crate) fn row_to_fields(row: &SqliteRow) -> Result<Fields, sqlx::Error> {
    let mut fields = Fields::with_capacity(row.len());

    for column in row.columns() {
        let idx = column.ordinal();
        let raw = row.try_get_raw(idx)?;

        let value = if raw.is_null() {
            Value::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" | "BOOLEAN" => Value::from(row.try_get_unchecked::<i64, _>(idx)?),
                "REAL" | "NUMERIC" => {
                    let f = row.try_get_unchecked::<f64, _>(idx)?;
                    Number::from_f64(f).map_or(Value::Null, Value::Number)
                }
                "BLOB" => {
                    let bytes = row.try_get_unchecked::<Vec<u8>, _>(idx)?;
                    Value::String(base64::engine::general_purpose::STANDARD.encode(bytes))
                }
                _ => Value::String(row.try_get_unchecked::<String, _>(idx)?),
            }
        };

        fields.insert(column.name().to_string(), value);
    }

    Ok(fields)
}
