//! Commerce client - typed API calls and cart state
//!
//! HTTP client for a CRUD6-style commerce backend (generic list reads for
//! orders, products, categories and catalogs, plus the cart upsert
//! endpoints), and the client-side cart state manager built on top of it.

pub mod cart;
pub mod config;
pub mod error;
pub mod http;
pub mod query;

pub use cart::{CartManager, LineInput};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use query::{ListQuery, SortDir};

// Re-export shared types for convenience
pub use shared::cart::{Cart, CartTotals, PaymentOption};
pub use shared::models;
pub use shared::response::{CartSaved, ListResponse};
pub use shared::util::format_currency;
