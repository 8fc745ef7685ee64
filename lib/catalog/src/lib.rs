//! Catalog ingestion for Wisata.
//!
//! Reads a headered CSV into a [`wisata_core::Corpus`], normalizing missing
//! model text to `""` and resolving display defaults once per row.

pub mod error;
pub mod loader;

pub use error::{CatalogError, Result};
pub use loader::{CatalogColumns, CatalogLoader, UNNAMED_ITEM};
