//! Form-key decoding.
//!
//! Clients post `application/x-www-form-urlencoded` bodies whose first key is
//! a JSON document and whose value is empty, e.g. `%7B%22name%22%3A%22x%22%7D=`.

use crate::error::DecodeError;
use serde_json::{Map, Value};
use url::form_urlencoded;

/// Decoded request object. Iteration follows the key order of the JSON text.
pub type Fields = Map<String, Value>;

const WHERE_CLAUSE: &str = "where";

/// Parses the first form key of `body` as a JSON object.
///
/// Any further pairs are ignored. The key is taken verbatim, so `[` and `]`
/// never split it into nested form fields.
pub fn decode_form_key(body: &[u8]) -> Result<Fields, DecodeError> {
    let (key, _) = form_urlencoded::parse(body)
        .next()
        .ok_or(DecodeError::EmptyBody)?;

    match serde_json::from_str::<Value>(&key)? {
        Value::Object(fields) => Ok(fields),
        other => Err(DecodeError::NotAnObject(json_kind(&other))),
    }
}

/// Returns the nested `where` mapping of a read payload.
pub fn read_filter(fields: &Fields) -> Result<&Fields, DecodeError> {
    fields
        .get(WHERE_CLAUSE)
        .and_then(Value::as_object)
        .ok_or(DecodeError::MissingWhere)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_percent_encoded_key() {
        let body = b"%7B%22name%22%3A%22buy%20milk%22%2C%22done%22%3A0%7D=";
        let fields = decode_form_key(body).expect("body must decode");
        assert_eq!(Value::Object(fields), json!({"name": "buy milk", "done": 0}));
    }

    #[test]
    fn keeps_key_order_of_json_text() {
        let body = b"%7B%22b%22%3A1%2C%22a%22%3A2%7D";
        let fields = decode_form_key(body).expect("body must decode");
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn only_first_key_is_used() {
        let body = b"%7B%22a%22%3A1%7D=&%7B%22b%22%3A2%7D=";
        let fields = decode_form_key(body).expect("body must decode");
        assert_eq!(Value::Object(fields), json!({"a": 1}));
    }

    #[test]
    fn brackets_stay_part_of_the_key() {
        let body = b"%7B%22name%22%3A%22a%5Bb%5D%22%2C%22tags%22%3A%5B1%2C2%5D%7D=";
        let fields = decode_form_key(body).expect("body must decode");
        assert_eq!(Value::Object(fields), json!({"name": "a[b]", "tags": [1, 2]}));

        let fields = decode_form_key(b"%7B%22name%22%3A%22a[b]%22%7D=").expect("body must decode");
        assert_eq!(fields.get("name"), Some(&json!("a[b]")));
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(matches!(decode_form_key(b""), Err(DecodeError::EmptyBody)));
        assert!(matches!(decode_form_key(b"&&"), Err(DecodeError::EmptyBody)));
    }

    #[test]
    fn non_json_key_is_rejected() {
        assert!(matches!(
            decode_form_key(b"name=buy+milk"),
            Err(DecodeError::InvalidJson(_))
        ));
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert!(matches!(
            decode_form_key(b"%5B1%2C2%5D"),
            Err(DecodeError::NotAnObject("array"))
        ));
        assert!(matches!(
            decode_form_key(b"42"),
            Err(DecodeError::NotAnObject("number"))
        ));
    }

    #[test]
    fn read_filter_requires_where_object() {
        let fields = json!({"where": {"done": 0}});
        let Value::Object(fields) = fields else {
            unreachable!()
        };
        let filter = read_filter(&fields).expect("where must resolve");
        assert_eq!(filter.get("done"), Some(&json!(0)));

        let Value::Object(missing) = json!({"done": 0}) else {
            unreachable!()
        };
        assert!(matches!(read_filter(&missing), Err(DecodeError::MissingWhere)));

        let Value::Object(scalar) = json!({"where": "done=0"}) else {
            unreachable!()
        };
        assert!(matches!(read_filter(&scalar), Err(DecodeError::MissingWhere)));
    }
}
