//! Cache types for catalog API responses.

use copperleaf_core::{Category, Product};

/// Cached value types.
///
/// Only data that came back from the remote service is cached; fallback
/// substitutions are never inserted so a recovered service is picked up on
/// the next call.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Box<Product>),
    Products(Vec<Product>),
    Categories(Vec<Category>),
}
