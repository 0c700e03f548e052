//! Request decoding and SQL statement construction for the todo service.
//!
//! Everything in this crate is pure: bytes in, statement strings out. The
//! statements are built by string formatting with no parameterization or
//! escaping, so caller-supplied text reaches the database verbatim.

pub mod decode;
pub mod error;
pub mod literal;
pub mod statement;

pub use decode::{Fields, decode_form_key, read_filter};
pub use error::DecodeError;
pub use statement::{TODO_TABLE, insert_statement, select_statement};
