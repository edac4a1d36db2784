//! Entity module - record types read from the flat JSON datasets.
//! These are the raw inputs; everything derived from them lives in `core`.

pub mod product_assignment;
pub mod product_charge;
pub mod serde_helpers;

pub use product_assignment::ProductAssignment;
pub use product_charge::ProductCharge;
