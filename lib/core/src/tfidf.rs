//! TF-IDF term-weighting model.
//!
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1` and a document weight is the raw
//! term count times `idf`, L2-normalized per document. The vocabulary is
//! sorted so term indices do not depend on hash ordering.

use crate::tokenizer::{Tokenizer, VectorizerConfig};
use crate::{Error, Result, SparseVector};
use ahash::AHashMap;
use std::collections::BTreeMap;
use tracing::debug;

/// A fitted, frozen TF-IDF model
#[derive(Debug, Clone)]
pub struct TfidfModel {
    tokenizer: Tokenizer,
    // term -> column index
    vocabulary: AHashMap<String, u32>,
    // column index -> term
    terms: Vec<String>,
    // column index -> idf
    idf: Vec<f32>,
    n_docs: usize,
}

impl TfidfModel {
    /// Fit with the default tokenizer settings
    pub fn fit<S: AsRef<str>>(texts: &[S]) -> Result<Self> {
        Self::fit_with_config(texts, VectorizerConfig::default())
    }

    pub fn fit_with_config<S: AsRef<str>>(texts: &[S], config: VectorizerConfig) -> Result<Self> {
        if texts.is_empty() {
            return Err(Error::Configuration(
                "cannot fit a term-weighting model on an empty corpus".to_string(),
            ));
        }

        let tokenizer = Tokenizer::new(config);

        // term -> document frequency
        let mut doc_freqs: BTreeMap<String, u32> = BTreeMap::new();
        for text in texts {
            let mut tokens = tokenizer.tokenize(text.as_ref());
            tokens.sort_unstable();
            tokens.dedup();
            for token in tokens {
                *doc_freqs.entry(token).or_insert(0) += 1;
            }
        }

        if doc_freqs.is_empty() {
            return Err(Error::Configuration(format!(
                "empty vocabulary: all {} documents are empty or contain only stop words",
                texts.len()
            )));
        }

        let n_docs = texts.len();
        let mut vocabulary = AHashMap::with_capacity(doc_freqs.len());
        let mut terms = Vec::with_capacity(doc_freqs.len());
        let mut idf = Vec::with_capacity(doc_freqs.len());
        for (index, (term, df)) in doc_freqs.into_iter().enumerate() {
            idf.push(smoothed_idf(n_docs, df));
            vocabulary.insert(term.clone(), index as u32);
            terms.push(term);
        }

        debug!(documents = n_docs, terms = terms.len(), "fitted tf-idf vocabulary");

        Ok(Self {
            tokenizer,
            vocabulary,
            terms,
            idf,
            n_docs,
        })
    }

    /// Fit and return the document vectors for the same texts
    pub fn fit_transform<S: AsRef<str>>(
        texts: &[S],
        config: VectorizerConfig,
    ) -> Result<(Self, Vec<SparseVector>)> {
        let model = Self::fit_with_config(texts, config)?;
        let vectors = texts.iter().map(|t| model.transform(t.as_ref())).collect();
        Ok((model, vectors))
    }

    /// Project text onto the fitted vocabulary.
    /// Unknown terms are dropped; text with no known terms gives a zero vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: AHashMap<u32, u32> = AHashMap::new();
        for token in self.tokenizer.tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0) += 1;
            }
        }

        let pairs: Vec<(u32, f32)> = counts
            .into_iter()
            .map(|(index, tf)| (index, tf as f32 * self.idf[index as usize]))
            .collect();

        SparseVector::from_pairs(self.terms.len(), pairs).normalized()
    }

    /// Number of distinct terms, which is also the vector dimension
    #[inline]
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    #[must_use]
    pub fn n_docs(&self) -> usize {
        self.n_docs
    }

    pub fn term_index(&self, term: &str) -> Option<u32> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.term_index(term).map(|i| self.idf[i as usize])
    }

    /// Terms in column order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

#[inline]
fn smoothed_idf(n_docs: usize, df: u32) -> f32 {
    (((1 + n_docs) as f64 / (1 + df as u64) as f64).ln() + 1.0) as f32
}
