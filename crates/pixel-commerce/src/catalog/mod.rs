//! Catalog module.
//!
//! Products and the full catalog snapshot fetched wholesale from the backend.

mod product;
mod snapshot;

pub use product::Product;
pub use snapshot::{Catalog, CatalogService};
