pub mod index;
pub mod todo;
