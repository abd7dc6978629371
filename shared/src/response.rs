//! API response and payload types
//!
//! Envelopes spoken by the commerce API: the generic list envelope returned
//! by every `api/crud6/{model}` listing, and the request/acknowledgement pair
//! used by the cart upsert endpoints.

use crate::cart::Cart;
use crate::models::{OrderLine, SalesOrder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Generic list envelope
///
/// Every list endpoint responds with:
/// ```json
/// {
///     "count": 132,
///     "count_filtered": 1,
///     "rows": [ ... ]
/// }
/// ```
/// `count`/`count_filtered` may be omitted; `rows` carries the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Total records for the model
    #[serde(default)]
    pub count: u64,
    /// Records matching the applied filters
    #[serde(default)]
    pub count_filtered: u64,
    /// The requested page of records
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
}

impl<T> ListResponse<T> {
    /// Take the first row, consuming the envelope.
    pub fn into_first(self) -> Option<T> {
        self.rows.into_iter().next()
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            count: 0,
            count_filtered: 0,
            rows: Vec::new(),
        }
    }
}

/// Body of a cart upsert request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartPayload {
    pub sales_order: SalesOrder,
    pub sales_order_lines: Vec<OrderLine>,
}

impl From<&Cart> for CartPayload {
    fn from(cart: &Cart) -> Self {
        Self {
            sales_order: cart.order.clone(),
            sales_order_lines: cart.lines.clone(),
        }
    }
}

/// Acknowledgement of a cart upsert
///
/// ```json
/// {
///     "id": 7,
///     "lines": { "1": { "id": 55 }, "2": { "id": 56 } }
/// }
/// ```
/// `lines` maps each line's `line_no` (as a string key) to the identity the
/// server assigned it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartSaved {
    /// Identity of the saved order, when the server reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub lines: HashMap<String, SavedLine>,
}

/// Per-line identity inside a [`CartSaved`] acknowledgement
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SavedLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_tolerates_missing_counts() {
        let envelope: ListResponse<i32> = serde_json::from_str(r#"{"rows": [5, 6]}"#).unwrap();
        assert_eq!(envelope.count, 0);
        assert_eq!(envelope.rows, vec![5, 6]);
        assert_eq!(envelope.into_first(), Some(5));

        let empty: ListResponse<i32> = serde_json::from_str("{}").unwrap();
        assert!(empty.rows.is_empty());
        assert_eq!(empty.into_first(), None);
    }

    #[test]
    fn test_cart_saved_parses_line_map_keys_as_strings() {
        let ack: CartSaved =
            serde_json::from_str(r#"{"id": 7, "lines": {"1": {"id": 55}, "2": {}}}"#).unwrap();
        assert_eq!(ack.id, Some(7));
        assert_eq!(ack.lines["1"].id, Some(55));
        assert_eq!(ack.lines["2"].id, None);
    }
}
