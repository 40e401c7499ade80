//! Catalog entities: products and categories.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductId};

/// A product in the catalog.
///
/// Owned by the catalog service's product collection; the storefront treats
/// products as immutable and only the admin CRUD endpoints change them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned unique identifier.
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Non-negative price in the store currency.
    pub price: Decimal,
    /// Image URI.
    pub image: String,
    /// Free-text category label.
    pub category: String,
    /// Customer rating, conventionally 0-5.
    pub rating: Decimal,
    pub in_stock: bool,
}

/// A browsable category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Optional image URI for category tiles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
