//! Shared types for the commerce client workspace
//!
//! Wire models for the CRUD6-style commerce API, the cart aggregate with
//! its derived totals, list/save response envelopes, and money utilities.

pub mod cart;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Cart re-exports (for convenient access)
pub use cart::{Cart, CartTotals, PaymentOption};
pub use response::{CartPayload, CartSaved, ListResponse, SavedLine};
