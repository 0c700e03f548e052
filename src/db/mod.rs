//! Database module: the single long-lived SQLite connection and its row shapes.
//!
//! Layout:
//! - `actor.rs`: actor owning the connection, plus its cloneable handle
//! - `models.rs`: insert outcome and dynamic row decoding
//! - `schema.rs`: bootstrap DDL for the `todo` table
//! - `traits.rs`: `TodoStore`, the seam handlers use to reach the database

pub mod actor;
pub mod models;
pub mod schema;
pub mod traits;

pub use models::InsertOutcome;
pub use schema::SQLITE_INIT;
pub use traits::TodoStore;

pub use actor::{DbActorHandle, spawn};
