//! Resilient catalog API client.
//!
//! Wraps every network call to the catalog/order service behind a bounded
//! deadline and substitutes bundled fallback data on any failure path, so
//! callers never observe a transport error. Built for a demo/offline-tolerant
//! deployment where the backend may be cold-started, slow, or absent: browse
//! and checkout must complete regardless. The cost is that a "successful"
//! checkout is not a reliable signal of actual order persistence; the
//! confirmation carries a `simulated` flag so the UI can disclose that.
//!
//! Uses `reqwest` for HTTP with per-request timeouts and `moka` to cache
//! successful remote reads (5-minute TTL). Fallback data is never cached.
//!
//! Each call attempts the remote path exactly once; there are no retries.

mod cache;
pub mod fallback;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use copperleaf_core::{
    CartLine, Category, CheckoutRequest, CustomerInfo, OrderConfirmation, Product, ProductId,
};

use crate::config::CatalogConfig;
use cache::CacheValue;

/// Confirmation message used when the service cannot be reached and the
/// order is acknowledged locally instead.
const DEMO_CONFIRMATION_MESSAGE: &str =
    "Order placed successfully! (Demo mode - server unavailable)";

/// Cache TTL for successful remote reads.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Where a response's data actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// The remote catalog service answered in time.
    Remote,
    /// The remote call failed; bundled data was substituted.
    Fallback,
}

/// A payload tagged with its [`DataSource`].
///
/// The tag is not an error: callers may surface it ("showing demo catalog")
/// or ignore it entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    const fn remote(data: T) -> Self {
        Self {
            data,
            source: DataSource::Remote,
        }
    }

    const fn fallback(data: T) -> Self {
        Self {
            data,
            source: DataSource::Fallback,
        }
    }
}

/// Errors surfaced to catalog client callers.
///
/// Transient connectivity failures are recovered internally and never appear
/// here; the only propagated condition is an id that exists neither remotely
/// nor in the fallback set, because no synthetic substitute exists for it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Product absent from both the remote service and the fallback data.
    #[error("Product not found: {0}")]
    NotFound(ProductId),
}

/// Client for the catalog/order service.
///
/// Cheaply cloneable; holds no mutable state of its own beyond the response
/// cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    http: reqwest::Client,
    base_url: String,
    read_timeout: Duration,
    write_timeout: Duration,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                http: reqwest::Client::new(),
                base_url: config.base_url.trim_end_matches('/').to_string(),
                read_timeout: config.read_timeout,
                write_timeout: config.write_timeout,
                cache,
            }),
        }
    }

    /// One remote GET attempt with the read deadline.
    ///
    /// Timeouts, transport errors, and non-2xx statuses all collapse into
    /// `reqwest::Error`; callers decide what to substitute.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, reqwest::Error> {
        self.inner
            .http
            .get(format!("{}{path}", self.inner.base_url))
            .timeout(self.inner.read_timeout)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }

    /// Fetch the product collection.
    ///
    /// Defined to never fail: every code path yields a product sequence,
    /// real or fallback.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Sourced<Vec<Product>> {
        let cache_key = "products".to_string();

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for products");
            return Sourced::remote(products);
        }

        match self.get_json::<Vec<Product>>("/products").await {
            Ok(products) => {
                self.inner
                    .cache
                    .insert(cache_key, CacheValue::Products(products.clone()))
                    .await;
                Sourced::remote(products)
            }
            Err(error) => {
                warn!(%error, "Catalog service unavailable, using fallback products");
                Sourced::fallback(fallback::products())
            }
        }
    }

    /// Fetch a single product by id.
    ///
    /// Same deadline/fallback discipline as [`Self::fetch_products`], with the
    /// fallback source filtered by id. The one fallible operation in the
    /// client: an id absent from both the remote result and the fallback set
    /// is a [`CatalogError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no data source knows the id.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn fetch_product(&self, id: ProductId) -> Result<Sourced<Product>, CatalogError> {
        let cache_key = format!("product:{id}");

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(Sourced::remote(*product));
        }

        match self.get_json::<Product>(&format!("/products/{id}")).await {
            Ok(product) => {
                self.inner
                    .cache
                    .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
                    .await;
                Ok(Sourced::remote(product))
            }
            Err(error) => {
                warn!(%error, "Catalog service unavailable, using fallback product");
                fallback::product_by_id(id)
                    .map(Sourced::fallback)
                    .ok_or(CatalogError::NotFound(id))
            }
        }
    }

    /// Fetch the category collection. Never fails.
    #[instrument(skip(self))]
    pub async fn fetch_categories(&self) -> Sourced<Vec<Category>> {
        let cache_key = "categories".to_string();

        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for categories");
            return Sourced::remote(categories);
        }

        match self.get_json::<Vec<Category>>("/categories").await {
            Ok(categories) => {
                self.inner
                    .cache
                    .insert(cache_key, CacheValue::Categories(categories.clone()))
                    .await;
                Sourced::remote(categories)
            }
            Err(error) => {
                warn!(%error, "Catalog service unavailable, using fallback categories");
                Sourced::fallback(fallback::categories())
            }
        }
    }

    /// Submit an order.
    ///
    /// Orders are lower-frequency and tolerate more latency than reads, so
    /// the write deadline is longer. On success the server-assigned
    /// confirmation is returned verbatim. On any failure a confirmation is
    /// synthesized locally with a random order id and `simulated = true`;
    /// the caller always receives a confirmation and always proceeds to
    /// clear the cart.
    #[instrument(skip(self, customer_info, cart_items))]
    pub async fn submit_order(
        &self,
        customer_info: CustomerInfo,
        cart_items: Vec<CartLine>,
        total: Decimal,
    ) -> OrderConfirmation {
        let request = CheckoutRequest {
            customer_info,
            cart_items,
            total,
        };

        let response = self
            .inner
            .http
            .post(format!("{}/checkout", self.inner.base_url))
            .timeout(self.inner.write_timeout)
            .json(&request)
            .send()
            .await;

        let result = match response {
            Ok(response) => match response.error_for_status() {
                Ok(response) => response.json::<OrderConfirmation>().await,
                Err(error) => Err(error),
            },
            Err(error) => Err(error),
        };

        match result {
            Ok(confirmation) => confirmation,
            Err(error) => {
                warn!(%error, "Catalog service unavailable, simulating order confirmation");
                OrderConfirmation {
                    success: true,
                    order_id: simulated_order_id(),
                    message: DEMO_CONFIRMATION_MESSAGE.to_string(),
                    simulated: true,
                }
            }
        }
    }

    /// Invalidate all cached reads.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}

/// Random 9-character base36 token for locally synthesized confirmations.
///
/// Uniqueness is best-effort, matching the server's own order ids.
fn simulated_order_id() -> String {
    use rand::Rng;

    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::rng();
    (0..9)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
