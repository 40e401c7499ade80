//! HTTP middleware for the catalog service.

pub mod admin_auth;
pub mod request_id;

pub use admin_auth::RequireAdminToken;
pub use request_id::request_id_middleware;
