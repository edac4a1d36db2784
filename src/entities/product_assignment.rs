//! Product assignment - a product attached to a reservation.
//!
//! Assignments come from the `product_assignment.json` dataset. Each one belongs
//! to exactly one reservation and may or may not have a charge recorded against it.

use super::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// One row of the product assignments dataset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAssignment {
    /// Unique identifier within the assignments dataset
    pub id: i64,
    /// Display name of the product (e.g., "Spa", "Breakfast")
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Reservation this product belongs to
    pub reservation_uuid: String,
}
