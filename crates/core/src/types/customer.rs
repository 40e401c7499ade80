//! Customer information captured at checkout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for [`CustomerInfo`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomerInfoError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("address must not be empty")]
    EmptyAddress,
}

/// Buyer details submitted with an order.
///
/// Transient: created when the checkout form is submitted and embedded in the
/// resulting order; not retained anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl CustomerInfo {
    /// Check that all fields are non-empty (after trimming whitespace).
    ///
    /// # Errors
    ///
    /// Returns the first empty field encountered, in declaration order.
    pub fn validate(&self) -> Result<(), CustomerInfoError> {
        if self.name.trim().is_empty() {
            return Err(CustomerInfoError::EmptyName);
        }
        if self.email.trim().is_empty() {
            return Err(CustomerInfoError::EmptyEmail);
        }
        if self.address.trim().is_empty() {
            return Err(CustomerInfoError::EmptyAddress);
        }
        Ok(())
    }
}
