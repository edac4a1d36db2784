//! Product charge - the billing state of a single product assignment.
//!
//! Charges come from the `product_charges.json` dataset and reference an
//! assignment through `special_product_assignment_id`.

use super::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// One row of the product charges dataset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductCharge {
    /// ID of the [`ProductAssignment`](super::ProductAssignment) being charged
    pub special_product_assignment_id: i64,
    /// Whether the charge is currently in effect; absent or null means not active
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
    /// Charged amount; absent or null means nothing was charged
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_full_charge() {
        let json = r#"{ "special_product_assignment_id": 1, "active": true, "amount": 49.5 }"#;
        let charge: ProductCharge = serde_json::from_str(json).unwrap();
        assert_eq!(charge.special_product_assignment_id, 1);
        assert!(charge.active);
        assert_eq!(charge.amount, 49.5);
    }

    #[test]
    fn test_missing_active_and_amount_default() {
        let json = r#"{ "special_product_assignment_id": 3 }"#;
        let charge: ProductCharge = serde_json::from_str(json).unwrap();
        assert!(!charge.active);
        assert_eq!(charge.amount, 0.0);
    }

    #[test]
    fn test_null_active_and_amount_default() {
        let json = r#"{ "special_product_assignment_id": 4, "active": null, "amount": null }"#;
        let charge: ProductCharge = serde_json::from_str(json).unwrap();
        assert!(!charge.active);
        assert_eq!(charge.amount, 0.0);
    }
}
