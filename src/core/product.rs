//! Per-reservation product lookup.
//!
//! Unlike [`summarize`](super::summarize) this does no rollup: it returns one
//! view per assignment of the requested reservation, in dataset order.

use crate::{
    core::charges::index_charges,
    entities::{ProductAssignment, ProductCharge},
};
use serde::{Deserialize, Serialize};

/// A product assigned to a single reservation, joined with its charge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReservationProductView {
    /// Assignment ID
    pub id: i64,
    /// Product name
    pub name: String,
    /// Charged amount, 0 when no charge exists
    pub amount: f64,
    /// Charge `active` flag; omitted when no charge exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Lists the products assigned to `reservation_uuid` with their charge data.
///
/// An unknown reservation yields an empty list. Charges are matched the same way
/// as in [`summarize`](super::summarize), so duplicate charges resolve identically.
#[must_use]
pub fn products_for_reservation(
    reservation_uuid: &str,
    assignments: &[ProductAssignment],
    charges: &[ProductCharge],
) -> Vec<ReservationProductView> {
    let charges_by_assignment = index_charges(charges);

    assignments
        .iter()
        .filter(|assignment| assignment.reservation_uuid == reservation_uuid)
        .map(|assignment| {
            let charge = charges_by_assignment.get(&assignment.id);
            ReservationProductView {
                id: assignment.id,
                name: assignment.name.clone(),
                amount: charge.map_or(0.0, |c| c.amount),
                active: charge.map(|c| c.active),
            }
        })
        .collect()
}
