//! Data models
//!
//! Row shapes served by the commerce API (CRUD6 generic models).
//! All IDs are `i64`, assigned by the server; `id: None` marks a record
//! that has never been persisted.

pub mod catalog;
pub mod category;
pub mod order;
pub mod product;

// Re-exports
pub use catalog::*;
pub use category::*;
pub use order::*;
pub use product::*;
