//! Data loading - reads the product datasets from flat JSON files.

pub mod snapshot;
pub mod store;

pub use snapshot::{DatasetSnapshot, load_snapshot, or_empty};
pub use store::{Dataset, JsonStore};
