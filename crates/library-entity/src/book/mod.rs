//! Book domain entities.

pub mod model;

pub use model::{Book, BookInput};
