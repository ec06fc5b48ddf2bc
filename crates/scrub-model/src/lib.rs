pub mod error;
pub mod schema;

pub use error::SchemaError;
pub use schema::{SchemaColumn, expected_columns, resolve_columns};
