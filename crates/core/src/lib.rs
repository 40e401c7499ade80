//! Copperleaf Core - Shared types library.
//!
//! This crate provides common types used across all Copperleaf components:
//! - `api` - Catalog/order service (document-store REST API)
//! - `storefront` - Public-facing storefront service
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! All types serialize to the camelCase JSON wire format shared by both
//! services (`inStock`, `orderId`, `createdAt`, ...).
//!
//! # Modules
//!
//! - [`types`] - Products, categories, cart lines, customers, and orders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
