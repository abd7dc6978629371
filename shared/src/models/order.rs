//! Sales Order Model

use serde::{Deserialize, Serialize};

/// Record lifecycle code shared by every commerce table; also the value the
/// list endpoints filter on when fetching live records.
pub const STATUS_ACTIVE: &str = "A";

/// Lifecycle code on an order line.
///
/// Only `Active` lines count toward cart totals. `Removed` marks a persisted
/// line the server still has to retire; `Deleted` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LineStatus {
    #[default]
    #[serde(rename = "A")]
    Active,
    #[serde(rename = "R")]
    Removed,
    #[serde(rename = "D")]
    Deleted,
}

/// Sales order entity
///
/// `net_amount`, `tax`, `discount` and `gross_amount` are derived from the
/// active lines; `epay_commission` is carried as stored and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,
    /// Workflow state (`"completed"`, `"pending"`, `"shipped"`, ...),
    /// distinct from the record lifecycle `status`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<String>,
    /// Order discriminator; cart shells use `"G"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    /// Owner of the order.
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_id: Option<i64>,
    /// ISO-8601 timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub net_amount: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub epay_commission: f64,
    #[serde(default)]
    pub gross_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
    /// Record lifecycle code; active records carry `"A"`.
    pub status: String,
}

impl SalesOrder {
    /// Whether the order has been persisted (server id assigned).
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Sales order line entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_catalog_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id1: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id2: Option<i64>,
    /// Positional key within the order, starting at 1.
    pub line_no: u32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub line_type: Option<String>,
    pub description: String,
    #[serde(default)]
    pub unit_price: f64,
    pub quantity: i32,
    #[serde(default)]
    pub net_amount: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub gross_amount: f64,
    #[serde(default)]
    pub balance_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: LineStatus,
}

impl OrderLine {
    /// Create an empty active line at the given position.
    pub fn new(line_no: u32) -> Self {
        Self {
            id: None,
            order_id: None,
            product_catalog_id: None,
            ref_id1: None,
            ref_id2: None,
            line_no,
            line_type: None,
            description: String::new(),
            unit_price: 0.0,
            quantity: 1,
            net_amount: 0.0,
            tax: 0.0,
            discount: 0.0,
            gross_amount: 0.0,
            balance_amount: 0.0,
            notes: None,
            status: LineStatus::Active,
        }
    }

    /// Whether the line counts toward cart totals.
    pub fn is_active(&self) -> bool {
        self.status == LineStatus::Active
    }
}
