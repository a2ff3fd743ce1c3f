pub mod schema;
pub mod transaction;
