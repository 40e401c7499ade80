//! In-memory document store.
//!
//! # Collections
//!
//! - `products` - the catalog, seeded with a sample on startup
//! - `categories` - browsable category labels
//! - `orders` - orders created by checkout
//!
//! The store keeps whole documents behind one `RwLock`; writers assign ids
//! by auto-increment (max + 1) the way the original collection logic does.
//! "Read the collection, write the collection" is the entire consistency
//! model - there is deliberately nothing more here.

mod seed;

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use tokio::sync::RwLock;

use copperleaf_core::{
    Category, CategoryId, CheckoutRequest, Order, OrderStatus, Product, ProductId,
};

/// Shared handle to the document collections.
///
/// Cheaply cloneable; all handlers operate on the same collections.
#[derive(Clone)]
pub struct DocumentStore {
    inner: Arc<RwLock<Collections>>,
}

#[derive(Default)]
struct Collections {
    products: Vec<Product>,
    categories: Vec<Category>,
    orders: Vec<Order>,
}

/// Fields for creating a product; the store assigns the id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
    pub rating: Decimal,
    pub in_stock: bool,
}

/// Partial product update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub rating: Option<Decimal>,
    pub in_stock: Option<bool>,
}

/// Fields for creating a category; the store assigns the id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Partial category update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub image: Option<String>,
}

/// Partial order update; only the status is admin-editable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
}

impl DocumentStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collections::default())),
        }
    }

    /// A store seeded with the sample catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collections {
                products: seed::products(),
                categories: seed::categories(),
                orders: Vec::new(),
            })),
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    pub async fn list_products(&self) -> Vec<Product> {
        self.inner.read().await.products.clone()
    }

    pub async fn get_product(&self, id: ProductId) -> Option<Product> {
        self.inner
            .read()
            .await
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned()
    }

    /// Insert a product with the next auto-increment id and return it.
    pub async fn insert_product(&self, new: NewProduct) -> Product {
        let mut collections = self.inner.write().await;
        let id = collections
            .products
            .iter()
            .map(|product| product.id.as_i64())
            .max()
            .unwrap_or(0)
            + 1;
        let product = Product {
            id: ProductId::new(id),
            title: new.title,
            description: new.description,
            price: new.price,
            image: new.image,
            category: new.category,
            rating: new.rating,
            in_stock: new.in_stock,
        };
        collections.products.push(product.clone());
        product
    }

    /// Apply a partial update and return the authoritative document.
    pub async fn update_product(&self, id: ProductId, patch: ProductPatch) -> Option<Product> {
        let mut collections = self.inner.write().await;
        let product = collections
            .products
            .iter_mut()
            .find(|product| product.id == id)?;

        if let Some(title) = patch.title {
            product.title = title;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(image) = patch.image {
            product.image = image;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(rating) = patch.rating {
            product.rating = rating;
        }
        if let Some(in_stock) = patch.in_stock {
            product.in_stock = in_stock;
        }

        Some(product.clone())
    }

    pub async fn delete_product(&self, id: ProductId) -> bool {
        let mut collections = self.inner.write().await;
        let before = collections.products.len();
        collections.products.retain(|product| product.id != id);
        collections.products.len() < before
    }

    // =========================================================================
    // Categories
    // =========================================================================

    pub async fn list_categories(&self) -> Vec<Category> {
        self.inner.read().await.categories.clone()
    }

    pub async fn insert_category(&self, new: NewCategory) -> Category {
        let mut collections = self.inner.write().await;
        let id = collections
            .categories
            .iter()
            .map(|category| category.id.as_i64())
            .max()
            .unwrap_or(0)
            + 1;
        let category = Category {
            id: CategoryId::new(id),
            name: new.name,
            image: new.image,
        };
        collections.categories.push(category.clone());
        category
    }

    pub async fn update_category(&self, id: CategoryId, patch: CategoryPatch) -> Option<Category> {
        let mut collections = self.inner.write().await;
        let category = collections
            .categories
            .iter_mut()
            .find(|category| category.id == id)?;

        if let Some(name) = patch.name {
            category.name = name;
        }
        if let Some(image) = patch.image {
            category.image = Some(image);
        }

        Some(category.clone())
    }

    pub async fn delete_category(&self, id: CategoryId) -> bool {
        let mut collections = self.inner.write().await;
        let before = collections.categories.len();
        collections.categories.retain(|category| category.id != id);
        collections.categories.len() < before
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Create an order from a checkout submission.
    ///
    /// Assigns a random order token and the `Processing` status.
    pub async fn create_order(&self, checkout: CheckoutRequest) -> Order {
        let order = Order {
            order_id: order_token(),
            customer_info: checkout.customer_info,
            cart_items: checkout.cart_items,
            total: checkout.total,
            status: OrderStatus::Processing,
            created_at: Utc::now(),
        };
        self.inner.write().await.orders.push(order.clone());
        order
    }

    pub async fn list_orders(&self) -> Vec<Order> {
        self.inner.read().await.orders.clone()
    }

    pub async fn get_order(&self, order_id: &str) -> Option<Order> {
        self.inner
            .read()
            .await
            .orders
            .iter()
            .find(|order| order.order_id == order_id)
            .cloned()
    }

    pub async fn update_order(&self, order_id: &str, patch: OrderPatch) -> Option<Order> {
        let mut collections = self.inner.write().await;
        let order = collections
            .orders
            .iter_mut()
            .find(|order| order.order_id == order_id)?;

        if let Some(status) = patch.status {
            order.status = status;
        }

        Some(order.clone())
    }

    pub async fn delete_order(&self, order_id: &str) -> bool {
        let mut collections = self.inner.write().await;
        let before = collections.orders.len();
        collections.orders.retain(|order| order.order_id != order_id);
        collections.orders.len() < before
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Random 9-character base36 order token.
///
/// Uniqueness is best-effort (random), not guaranteed.
fn order_token() -> String {
    use rand::Rng;

    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::rng();
    (0..9)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
