//! Shared test utilities for the reservation service.
//!
//! Record builders with terse signatures plus helpers for writing datasets
//! into temporary directories.

use crate::entities::{ProductAssignment, ProductCharge};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Builds a product assignment.
pub fn assignment(id: i64, name: &str, reservation_uuid: &str) -> ProductAssignment {
    ProductAssignment {
        id,
        name: name.to_string(),
        reservation_uuid: reservation_uuid.to_string(),
    }
}

/// Builds a product charge for assignment `assignment_id`.
pub const fn charge(assignment_id: i64, active: bool, amount: f64) -> ProductCharge {
    ProductCharge {
        special_product_assignment_id: assignment_id,
        active,
        amount,
    }
}

/// Writes both dataset files into `dir` under their real file names.
///
/// # Panics
/// Panics if the files cannot be written; only used from tests.
#[allow(clippy::unwrap_used)]
pub fn write_datasets(dir: &Path, assignments: &[ProductAssignment], charges: &[ProductCharge]) {
    std::fs::write(
        dir.join("product_assignment.json"),
        serde_json::to_string_pretty(assignments).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join("product_charges.json"),
        serde_json::to_string_pretty(charges).unwrap(),
    )
    .unwrap();
}
