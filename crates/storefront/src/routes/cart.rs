//! Cart route handlers.
//!
//! The cart aggregate is session-scoped: each handler loads the current
//! `CartState` from the session (empty on first touch), applies exactly one
//! state-machine operation, writes the new state back, and returns it. The
//! reducer itself is synchronous, so each mutation is atomic with respect to
//! the session it belongs to.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use copperleaf_core::ProductId;

use crate::cart::CartState;
use crate::error::Result;
use crate::state::AppState;

/// Session key for the cart aggregate.
pub const CART_KEY: &str = "cart";

/// Load the cart from the session, defaulting to an empty cart.
pub async fn load_cart(session: &Session) -> Result<CartState> {
    Ok(session.get::<CartState>(CART_KEY).await?.unwrap_or_default())
}

/// Write the cart back to the session.
pub async fn save_cart(session: &Session, cart: &CartState) -> Result<()> {
    session.insert(CART_KEY, cart).await?;
    Ok(())
}

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemBody {
    pub product_id: i64,
}

/// Update-quantity request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemBody {
    pub product_id: i64,
    /// Non-positive values remove the line.
    pub quantity: i64,
}

/// Return the current cart state.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartState>> {
    let cart = load_cart(&session).await?;
    Ok(Json(cart))
}

/// Add one unit of a product to the cart.
///
/// The product is resolved through the resilient catalog client, so adding
/// works even when the catalog service is down; only an id unknown to every
/// data source is a 404.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AddItemBody>,
) -> Result<Json<CartState>> {
    let product = state
        .catalog()
        .fetch_product(ProductId::new(body.product_id))
        .await?;

    let mut cart = load_cart(&session).await?;
    cart.add(&product.data);
    save_cart(&session, &cart).await?;

    Ok(Json(cart))
}

/// Set the quantity of a cart line. Unknown ids are a silent no-op.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(body): Json<UpdateItemBody>,
) -> Result<Json<CartState>> {
    let mut cart = load_cart(&session).await?;
    cart.update_quantity(ProductId::new(body.product_id), body.quantity);
    save_cart(&session, &cart).await?;

    Ok(Json(cart))
}

/// Remove a cart line. Unknown ids are a silent no-op.
#[instrument(skip(session))]
pub async fn remove(session: Session, Path(id): Path<i64>) -> Result<Json<CartState>> {
    let mut cart = load_cart(&session).await?;
    cart.remove(ProductId::new(id));
    save_cart(&session, &cart).await?;

    Ok(Json(cart))
}

/// Empty the cart. Leaves the panel flag alone.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Json<CartState>> {
    let mut cart = load_cart(&session).await?;
    cart.clear();
    save_cart(&session, &cart).await?;

    Ok(Json(cart))
}

/// Flip the cart-panel visibility flag.
#[instrument(skip(session))]
pub async fn toggle(session: Session) -> Result<Json<CartState>> {
    let mut cart = load_cart(&session).await?;
    cart.toggle_open();
    save_cart(&session, &cart).await?;

    Ok(Json(cart))
}
