//! Core business logic - framework-agnostic aggregation over loaded datasets.
//!
//! Nothing in here performs I/O. Every function takes already-loaded records
//! and returns derived views, so the HTTP layer and the tests can call them directly.

pub mod charges;
pub mod product;
pub mod summary;

pub use charges::index_charges;
pub use product::{ReservationProductView, products_for_reservation};
pub use summary::{ProductEntry, ProductStatus, ReservationSummary, summarize};
