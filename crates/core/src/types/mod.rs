//! Core types for Copperleaf.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod customer;
pub mod id;
pub mod order;
pub mod product;

pub use cart::CartLine;
pub use customer::{CustomerInfo, CustomerInfoError};
pub use id::*;
pub use order::{CheckoutRequest, Order, OrderConfirmation, OrderStatus};
pub use product::{Category, Product};
