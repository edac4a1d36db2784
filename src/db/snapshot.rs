//! Concurrent, fail-open loading of both datasets.

use super::store::{Dataset, JsonStore};
use crate::entities::{ProductAssignment, ProductCharge};
use crate::errors::Result;
use tracing::{error, info};

/// Both datasets as read for one computation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DatasetSnapshot {
    /// Product assignments, empty if the dataset could not be read
    pub assignments: Vec<ProductAssignment>,
    /// Product charges, empty if the dataset could not be read
    pub charges: Vec<ProductCharge>,
}

/// Substitutes an empty collection for a failed read, logging the failure.
pub fn or_empty<T>(dataset: Dataset, result: Result<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        error!("Error reading {} dataset, using empty set: {}", dataset, e);
        Vec::new()
    })
}

/// Reads both datasets concurrently.
///
/// Never fails: a dataset that cannot be read or parsed is replaced by an
/// empty collection without affecting the other one.
pub async fn load_snapshot(store: &JsonStore) -> DatasetSnapshot {
    let (assignments, charges) = tokio::join!(store.load_assignments(), store.load_charges());
    let snapshot = DatasetSnapshot {
        assignments: or_empty(Dataset::Assignments, assignments),
        charges: or_empty(Dataset::Charges, charges),
    };
    info!(
        "Loaded {} assignments and {} charges from {}",
        snapshot.assignments.len(),
        snapshot.charges.len(),
        store.data_dir().display()
    );
    snapshot
}
