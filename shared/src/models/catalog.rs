//! Catalog Model

use super::product::default_active_status;
use serde::{Deserialize, Serialize};

/// Catalog entity (a named grouping of product listings)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Owning user; 0 for shared catalogs.
    #[serde(default)]
    pub user_id: i64,
    /// Parent catalog; 0 at the root.
    #[serde(default)]
    pub parent_id: i64,
    pub name: String,
    pub description: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Two-char catalog discriminator.
    #[serde(rename = "type")]
    pub catalog_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
    #[serde(default = "default_active_status")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Product listing within a catalog (pivot record with price override)
///
/// `product_catalog.id` is what cart lines reference through
/// `product_catalog_id`; `unit_price`/`tax` here override the product's base
/// values for this catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductCatalog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub product_id: i64,
    pub catalog_id: i64,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default = "default_active_status")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
