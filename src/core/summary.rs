//! Reservation summary business logic.
//!
//! Joins product assignments to their charges and rolls them up per reservation.
//! A reservation's `amount` and `numOfCharges` only count products whose charge is
//! active, but every assigned product is listed in `products` with a status.

use crate::{
    core::charges::index_charges,
    entities::{ProductAssignment, ProductCharge},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Billing status of one assigned product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// A charge exists and is active
    Active,
    /// A charge exists but is no longer active
    Cancelled,
    /// No charge has been recorded for the assignment yet
    Initial,
}

impl ProductStatus {
    /// Classifies an assignment by its (optional) matching charge.
    #[must_use]
    pub const fn from_charge(charge: Option<&ProductCharge>) -> Self {
        match charge {
            Some(charge) if charge.active => Self::Active,
            Some(_) => Self::Cancelled,
            None => Self::Initial,
        }
    }
}

/// One product line inside a [`ReservationSummary`].
///
/// Charge fields are only present when a charge exists for the assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    /// Assignment ID copied from the charge, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_product_assignment_id: Option<i64>,
    /// Raw `active` flag copied from the charge, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Product name from the assignment
    pub name: String,
    /// Derived billing status
    pub status: ProductStatus,
    /// Charged amount, 0 when no charge exists
    pub amount: f64,
}

impl ProductEntry {
    /// Builds the product line for an assignment and its matching charge.
    #[must_use]
    pub fn new(assignment: &ProductAssignment, charge: Option<&ProductCharge>) -> Self {
        Self {
            special_product_assignment_id: charge.map(|c| c.special_product_assignment_id),
            active: charge.map(|c| c.active),
            name: assignment.name.clone(),
            status: ProductStatus::from_charge(charge),
            amount: charge.map_or(0.0, |c| c.amount),
        }
    }
}

/// Per-reservation rollup of products and active charges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReservationSummary {
    /// Reservation the products belong to
    pub reservation_uuid: String,
    /// Sum of active charge amounts
    pub amount: f64,
    /// Number of active charges
    #[serde(rename = "numOfCharges")]
    pub num_of_charges: u32,
    /// Every assigned product, in dataset order
    pub products: Vec<ProductEntry>,
}

impl ReservationSummary {
    fn empty(reservation_uuid: String) -> Self {
        Self {
            reservation_uuid,
            amount: 0.0,
            num_of_charges: 0,
            products: Vec::new(),
        }
    }

    fn record(&mut self, entry: ProductEntry) {
        if entry.status == ProductStatus::Active {
            self.amount += entry.amount;
            self.num_of_charges += 1;
        }
        self.products.push(entry);
    }
}

/// Groups assignments by reservation and rolls up their charges.
///
/// Summaries appear in the order their reservation UUID is first seen in
/// `assignments`. Runs in O(A + C).
#[must_use]
pub fn summarize(
    assignments: &[ProductAssignment],
    charges: &[ProductCharge],
) -> Vec<ReservationSummary> {
    let charges_by_assignment = index_charges(charges);
    let mut summaries: Vec<ReservationSummary> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for assignment in assignments {
        let charge = charges_by_assignment.get(&assignment.id).copied();
        let entry = ProductEntry::new(assignment, charge);

        let position = *positions
            .entry(assignment.reservation_uuid.as_str())
            .or_insert_with(|| {
                summaries.push(ReservationSummary::empty(
                    assignment.reservation_uuid.clone(),
                ));
                summaries.len() - 1
            });
        summaries[position].record(entry);
    }

    summaries
}
