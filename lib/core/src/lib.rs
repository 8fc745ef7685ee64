//! # Wisata Core
//!
//! Content-based recommendation over a catalog of free-text items.
//!
//! This crate provides the text-similarity engine:
//!
//! - [`Corpus`] - The immutable catalog of [`Item`]s
//! - [`TfidfModel`] - Vocabulary and IDF weights fitted once over the catalog
//! - [`SimilarityEngine`] - Pairwise cosine matrix plus query projection
//! - [`Recommender`] - Top-k ranking by item or by free text
//!
//! ## Example
//!
//! ```rust
//! use wisata_core::{Corpus, Item, Recommender, RecommenderConfig};
//!
//! let corpus = Corpus::new(vec![
//!     Item::new("Grojogan Sewu", "waterfall forest hiking"),
//!     Item::new("Jumog", "waterfall pool swimming"),
//!     Item::new("Museum Sangiran", "museum history art"),
//! ]);
//! let recommender = Recommender::fit(corpus, RecommenderConfig::default()).unwrap();
//!
//! let similar = recommender.recommend_by_item("Jumog", 5).unwrap();
//! assert_eq!(similar[0].item.name, "Grojogan Sewu");
//!
//! let found = recommender.recommend_by_query("waterfall", 5);
//! assert_eq!(found.len(), 2);
//! ```

pub mod corpus;
pub mod error;
pub mod recommend;
pub mod similarity;
pub mod tfidf;
pub mod tokenizer;
pub mod vector;

pub use corpus::{Corpus, Item, ItemAttributes};
pub use error::{Error, Result};
pub use recommend::{Recommendation, Recommender, RecommenderConfig, DEFAULT_TOP_K};
pub use similarity::{similarity_to_query, SimilarityEngine, SimilarityMatrix};
pub use tfidf::TfidfModel;
pub use tokenizer::{StopWords, Tokenizer, VectorizerConfig};
pub use vector::SparseVector;
