use crate::similarity::SimilarityEngine;
use crate::tokenizer::VectorizerConfig;
use crate::{Corpus, Error, Item, Result, SparseVector};
use serde::Serialize;
use tracing::debug;

/// Default number of recommendations per request
pub const DEFAULT_TOP_K: usize = 5;

/// Configuration for a recommender
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    pub top_k: usize,
    pub vectorizer: VectorizerConfig,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            vectorizer: VectorizerConfig::default(),
        }
    }
}

/// One ranked catalog item
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    /// Row in the catalog
    pub index: usize,
    pub item: &'a Item,
    pub score: f32,
}

/// Content-based recommender over an immutable catalog.
///
/// Built once with [`Recommender::fit`]; every query afterwards is a pure
/// read, so a single instance can be shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Recommender {
    config: RecommenderConfig,
    corpus: Corpus,
    engine: SimilarityEngine,
}

impl Recommender {
    pub fn fit(corpus: Corpus, config: RecommenderConfig) -> Result<Self> {
        let engine = SimilarityEngine::fit(&corpus.texts(), config.vectorizer.clone())?;
        Ok(Self { config, corpus, engine })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn engine(&self) -> &SimilarityEngine {
        &self.engine
    }

    pub fn top_k(&self) -> usize {
        self.config.top_k
    }

    #[inline]
    pub fn transform(&self, text: &str) -> SparseVector {
        self.engine.transform(text)
    }

    /// Nearest neighbours of the item named `name`.
    ///
    /// The item's own row is never returned, neighbours with a score of zero
    /// or less are dropped, and ties keep catalog order.
    pub fn recommend_by_item(&self, name: &str, k: usize) -> Result<Vec<Recommendation<'_>>> {
        let index = self
            .corpus
            .index_of(name)
            .ok_or_else(|| Error::ItemNotFound(name.to_string()))?;

        let row = self
            .engine
            .matrix()
            .row(index)
            .ok_or_else(|| Error::ItemNotFound(name.to_string()))?;

        let results: Vec<Recommendation<'_>> = rank_descending(row)
            .into_iter()
            .filter(|&i| i != index && row[i] > 0.0)
            .take(k)
            .map(|i| self.recommendation(i, row[i]))
            .collect();

        debug!(item = name, k, returned = results.len(), "recommend by item");
        Ok(results)
    }

    /// Items most similar to free text.
    ///
    /// The top `k` rows are selected first and only then are non-positive
    /// scores removed, so fewer than `k` results may come back even when
    /// weaker matches exist further down. An empty result means no match.
    pub fn recommend_by_query(&self, text: &str, k: usize) -> Vec<Recommendation<'_>> {
        let scores = self.engine.score_text(text);

        let results: Vec<Recommendation<'_>> = rank_descending(&scores)
            .into_iter()
            .take(k)
            .filter(|&i| scores[i] > 0.0)
            .map(|i| self.recommendation(i, scores[i]))
            .collect();

        debug!(query = text, k, returned = results.len(), "recommend by query");
        results
    }

    fn recommendation(&self, index: usize, score: f32) -> Recommendation<'_> {
        Recommendation {
            index,
            item: &self.corpus.items()[index],
            score,
        }
    }
}

/// Indices ordered by score, highest first. Stable, so ties keep input order.
fn rank_descending(scores: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommender(texts: &[&str]) -> Recommender {
        let corpus: Corpus = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Item::new(format!("item{}", i + 1), *t))
            .collect();
        Recommender::fit(corpus, RecommenderConfig::default()).unwrap()
    }

    fn names(results: &[Recommendation<'_>]) -> Vec<String> {
        results.iter().map(|r| r.item.name.clone()).collect()
    }

    #[test]
    fn test_rank_descending_is_stable() {
        assert_eq!(rank_descending(&[0.5, 0.9, 0.5, 0.0, 0.9]), vec![1, 4, 0, 2, 3]);
    }

    #[test]
    fn test_query_ranks_matching_items() {
        let rec = recommender(&[
            "waterfall forest hiking",
            "waterfall pool swimming",
            "museum history art",
        ]);
        let results = rec.recommend_by_query("waterfall", 5);
        assert_eq!(names(&results), vec!["item1", "item2"]);
        assert!(results.iter().all(|r| r.score > 0.0));
    }

    #[test]
    fn test_by_item_prefers_shared_vocabulary() {
        let rec = recommender(&[
            "waterfall pool forest",
            "waterfall pool swimming",
            "museum swimming history",
        ]);
        let results = rec.recommend_by_item("item2", 5).unwrap();
        assert_eq!(names(&results), vec!["item1", "item3"]);
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_by_item_excludes_self() {
        let rec = recommender(&["lake camp", "lake view", "lake trail", "lake"]);
        for name in ["item1", "item2", "item3", "item4"] {
            let results = rec.recommend_by_item(name, 10).unwrap();
            assert!(results.iter().all(|r| r.item.name != name));
            assert!(results.len() <= 3);
        }
    }

    #[test]
    fn test_by_item_keeps_duplicate_descriptions() {
        let rec = recommender(&["hot spring", "hot spring", "tea garden"]);
        let results = rec.recommend_by_item("item2", 5).unwrap();
        assert_eq!(names(&results), vec!["item1"]);
        assert!((results[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_by_item_respects_k() {
        let rec = recommender(&["lake camp", "lake view", "lake trail", "lake"]);
        assert_eq!(rec.recommend_by_item("item1", 2).unwrap().len(), 2);
        assert!(rec.recommend_by_item("item1", 0).unwrap().is_empty());
    }

    #[test]
    fn test_by_item_does_not_pad_with_unrelated_items() {
        let rec = recommender(&["waterfall", "museum", "temple"]);
        assert!(rec.recommend_by_item("item1", 5).unwrap().is_empty());
    }

    #[test]
    fn test_by_item_unknown_id() {
        let rec = recommender(&["waterfall"]);
        assert_eq!(
            rec.recommend_by_item("unknown-id", 5).unwrap_err(),
            Error::ItemNotFound("unknown-id".to_string())
        );
    }

    #[test]
    fn test_query_of_stop_words_is_empty() {
        let rec = recommender(&["waterfall forest", "museum art"]);
        assert!(rec.recommend_by_query("the and of", 5).is_empty());
        assert!(rec.recommend_by_query("volcano", 5).is_empty());
        assert!(rec.recommend_by_query("", 5).is_empty());
    }

    #[test]
    fn test_query_filters_after_selecting_window() {
        let rec = recommender(&["lake", "lake", "lake", "lake forest camp"]);
        let scores = rec.engine().score_text("lake");
        assert!(scores[3] > 0.0);

        let results = rec.recommend_by_query("lake", 2);
        // item3 and item4 score above zero but fall outside the window
        assert_eq!(names(&results), vec!["item1", "item2"]);
    }

    #[test]
    fn test_query_ties_keep_catalog_order() {
        let rec = recommender(&["museum", "lake", "lake", "lake"]);
        let results = rec.recommend_by_query("lake", 2);
        assert_eq!(names(&results), vec!["item2", "item3"]);
    }

    #[test]
    fn test_fit_empty_corpus() {
        let result = Recommender::fit(Corpus::default(), RecommenderConfig::default());
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
