//! # Wisata
//!
//! A content-based recommender for tourism catalogs.
//!
//! Every item is described by free text. Wisata fits a TF-IDF model over the
//! catalog once at startup, precomputes the pairwise cosine similarity matrix,
//! and then answers two kinds of request:
//!
//! - **By item**: the nearest neighbours of a catalog entry, itself excluded
//! - **By query**: the entries closest to arbitrary text
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! wisata --catalog WK_combination_final.csv --http-port 8080
//! curl 'http://localhost:8080/search?q=waterfall'
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use wisata::prelude::*;
//!
//! let corpus = CatalogLoader::default().load_path("WK_combination_final.csv").unwrap();
//! let recommender = Recommender::fit(corpus, RecommenderConfig::default()).unwrap();
//!
//! for rec in recommender.recommend_by_query("air terjun", 5) {
//!     println!("{} ({:.3})", rec.item.name, rec.score);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `wisata-core` - Corpus, TF-IDF model, similarity engine, recommender
//! - `wisata-catalog` - CSV ingestion with attribute defaults
//! - `wisata-api` - REST API

// Re-export core types
pub use wisata_core::{
    Corpus, Item, ItemAttributes,
    TfidfModel, SparseVector, VectorizerConfig, StopWords,
    SimilarityEngine, SimilarityMatrix,
    Recommender, RecommenderConfig, Recommendation,
    Error, Result,
};

// Re-export catalog
pub use wisata_catalog::{CatalogColumns, CatalogError, CatalogLoader};

// Re-export API
pub use wisata_api::{ApiState, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Corpus, Item, ItemAttributes,
        Recommender, RecommenderConfig, Recommendation,
        VectorizerConfig, StopWords,
        Error, Result,
        CatalogLoader, CatalogColumns,
        ApiState, RestApi,
    };
}
