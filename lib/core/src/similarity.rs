//! Cosine similarity over fitted document vectors.
//!
//! The engine owns the fitted model together with the per-item vectors and
//! the pairwise matrix, so every projection of new text goes through the
//! same frozen weights.

use crate::tfidf::TfidfModel;
use crate::tokenizer::VectorizerConfig;
use crate::{Result, SparseVector};
use tracing::info;

/// Dense, symmetric `N×N` similarity matrix stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute every pairwise cosine similarity.
    ///
    /// Only the upper triangle is evaluated and then mirrored. The diagonal
    /// is pinned to 1.0 for non-zero vectors (0.0 for zero vectors) so no
    /// near-duplicate can score above self-similarity through rounding.
    pub fn compute(vectors: &[SparseVector]) -> Self {
        let n = vectors.len();
        let mut data = vec![0.0f32; n * n];

        for i in 0..n {
            data[i * n + i] = if vectors[i].is_zero() { 0.0 } else { 1.0 };
            for j in (i + 1)..n {
                let sim = vectors[i].cosine_similarity(&vectors[j]);
                data[i * n + j] = sim;
                data[j * n + i] = sim;
            }
        }

        Self { n, data }
    }

    /// Number of rows (and columns)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity of items `i` and `j`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        assert!(i < self.n && j < self.n, "({}, {}) out of bounds for {}x{}", i, j, self.n, self.n);
        self.data[i * self.n + j]
    }

    /// Row `i`, or `None` when out of bounds
    #[inline]
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        (i < self.n).then(|| &self.data[i * self.n..(i + 1) * self.n])
    }

    /// Largest entry; 1.0 unless every vector is zero
    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(0.0, f32::max)
    }
}

/// Score a query against every vector with the matrix's cosine convention
pub fn similarity_to_query(query: &SparseVector, vectors: &[SparseVector]) -> Vec<f32> {
    vectors.iter().map(|v| query.cosine_similarity(v)).collect()
}

/// Fitted model, document vectors and pairwise matrix, frozen after `fit`
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    model: TfidfModel,
    vectors: Vec<SparseVector>,
    matrix: SimilarityMatrix,
}

impl SimilarityEngine {
    pub fn fit<S: AsRef<str>>(texts: &[S], config: VectorizerConfig) -> Result<Self> {
        let (model, vectors) = TfidfModel::fit_transform(texts, config)?;
        let matrix = SimilarityMatrix::compute(&vectors);

        let empty_docs = vectors.iter().filter(|v| v.is_zero()).count();
        info!(
            documents = vectors.len(),
            vocabulary = model.vocabulary_len(),
            empty_documents = empty_docs,
            "similarity engine fitted"
        );

        Ok(Self { model, vectors, matrix })
    }

    /// Project text into the fitted vector space
    #[inline]
    pub fn transform(&self, text: &str) -> SparseVector {
        self.model.transform(text)
    }

    /// Score arbitrary text against every document
    pub fn score_text(&self, text: &str) -> Vec<f32> {
        similarity_to_query(&self.transform(text), &self.vectors)
    }

    pub fn similarity_to_query(&self, query: &SparseVector) -> Vec<f32> {
        similarity_to_query(query, &self.vectors)
    }

    pub fn model(&self) -> &TfidfModel {
        &self.model
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SimilarityEngine {
        SimilarityEngine::fit(
            &[
                "waterfall forest hiking",
                "waterfall pool swimming",
                "museum history art",
                "",
                "forest hiking trail waterfall",
            ],
            VectorizerConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let engine = engine();
        let m = engine.matrix();
        for i in 0..m.len() {
            for j in 0..m.len() {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
    }

    #[test]
    fn test_self_similarity_is_maximal() {
        let engine = engine();
        let m = engine.matrix();
        assert_eq!(m.max_value(), 1.0);
        for i in [0, 1, 2, 4] {
            assert_eq!(m.get(i, i), m.max_value());
            let row = m.row(i).unwrap();
            assert!(row.iter().all(|&s| s <= m.get(i, i)));
        }
    }

    #[test]
    fn test_zero_vector_row_is_all_zero() {
        let engine = engine();
        assert!(engine.matrix().row(3).unwrap().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_disjoint_documents_have_zero_similarity() {
        let engine = engine();
        assert_eq!(engine.matrix().get(0, 2), 0.0);
        assert!(engine.matrix().get(0, 1) > 0.0);
        assert!(engine.matrix().get(0, 4) > engine.matrix().get(0, 1));
    }

    #[test]
    fn test_query_scores_match_matrix_convention() {
        let engine = engine();
        let scores = engine.score_text("waterfall forest hiking");
        let row = engine.matrix().row(0).unwrap();
        for (a, b) in scores.iter().zip(row) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_query_scores_zero() {
        let engine = engine();
        let scores = engine.score_text("the of and");
        assert_eq!(scores.len(), 5);
        assert!(scores.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_refit_is_deterministic() {
        assert_eq!(engine().matrix(), engine().matrix());
    }

    #[test]
    fn test_row_out_of_bounds() {
        assert!(engine().matrix().row(5).is_none());
    }
}
