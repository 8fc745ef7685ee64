use serde::{Deserialize, Serialize};

/// A sparse vector over the fitted vocabulary.
///
/// Entries are kept sorted by index with no duplicates and no explicit zeros,
/// which lets dot products run as a single merge pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SparseVector {
    dim: usize,
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseVector {
    /// All-zero vector of the given dimension.
    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Build from `(index, value)` pairs in any order.
    /// Repeated indices are summed; zero values are dropped.
    pub fn from_pairs(dim: usize, mut pairs: Vec<(u32, f32)>) -> Self {
        pairs.sort_unstable_by_key(|&(i, _)| i);

        let mut indices: Vec<u32> = Vec::with_capacity(pairs.len());
        let mut values: Vec<f32> = Vec::with_capacity(pairs.len());
        for (i, v) in pairs {
            debug_assert!((i as usize) < dim, "index {} out of bounds for dim {}", i, dim);
            match indices.last() {
                Some(&last) if last == i => {
                    if let Some(acc) = values.last_mut() {
                        *acc += v;
                    }
                }
                _ => {
                    indices.push(i);
                    values.push(v);
                }
            }
        }

        let mut v = Self { dim, indices, values };
        v.prune_zeros();
        v
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored (non-zero) entries
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Value at `index`, zero when absent
    pub fn get(&self, index: u32) -> f32 {
        self.indices
            .binary_search(&index)
            .map(|pos| self.values[pos])
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f32)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Dot product by merging the two sorted index lists.
    /// Accumulates in f64 so long documents don't drift.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut acc = 0.0f64;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    acc += self.values[i] as f64 * other.values[j] as f64;
                    i += 1;
                    j += 1;
                }
            }
        }
        acc as f32
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.values
            .iter()
            .map(|&v| v as f64 * v as f64)
            .sum::<f64>()
            .sqrt() as f32
    }

    /// Cosine similarity, clamped into `[-1, 1]`.
    /// Zero when either side has zero norm or the dimensions disagree.
    #[inline]
    pub fn cosine_similarity(&self, other: &SparseVector) -> f32 {
        if self.dim != other.dim {
            return 0.0;
        }

        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        (self.dot(other) / (norm_a * norm_b)).clamp(-1.0, 1.0)
    }

    /// Normalize the vector to unit length
    #[inline]
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f32::EPSILON {
            let inv_norm = 1.0 / norm;
            for x in &mut self.values {
                *x *= inv_norm;
            }
        }
    }

    /// Get normalized copy
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut v = self.clone();
        v.normalize();
        v
    }

    /// Expand into a dense `Vec` of length `dim`.
    pub fn to_dense(&self) -> Vec<f32> {
        let mut dense = vec![0.0; self.dim];
        for (i, v) in self.iter() {
            dense[i as usize] = v;
        }
        dense
    }

    fn prune_zeros(&mut self) {
        if self.values.iter().all(|&v| v != 0.0) {
            return;
        }
        let (indices, values): (Vec<u32>, Vec<f32>) = self
            .iter()
            .filter(|&(_, v)| v != 0.0)
            .unzip();
        self.indices = indices;
        self.values = values;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_sorts_and_merges() {
        let v = SparseVector::from_pairs(5, vec![(3, 1.0), (0, 2.0), (3, 0.5), (1, 0.0)]);
        assert_eq!(v.indices(), &[0, 3]);
        assert_eq!(v.values(), &[2.0, 1.5]);
        assert_eq!(v.get(1), 0.0);
        assert_eq!(v.to_dense(), vec![2.0, 0.0, 0.0, 1.5, 0.0]);
    }

    #[test]
    fn test_cosine_similarity() {
        let v1 = SparseVector::from_pairs(2, vec![(0, 1.0)]);
        let v2 = SparseVector::from_pairs(2, vec![(0, 3.0)]);
        assert!((v1.cosine_similarity(&v2) - 1.0).abs() < 1e-6);

        let v3 = SparseVector::from_pairs(2, vec![(1, 1.0)]);
        assert!((v1.cosine_similarity(&v3) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_norm_is_zero_similarity() {
        let zero = SparseVector::zeros(3);
        let v = SparseVector::from_pairs(3, vec![(2, 1.0)]);
        assert_eq!(zero.cosine_similarity(&v), 0.0);
        assert_eq!(zero.cosine_similarity(&zero), 0.0);
    }

    #[test]
    fn test_dimension_mismatch_is_zero() {
        let a = SparseVector::from_pairs(3, vec![(0, 1.0)]);
        let b = SparseVector::from_pairs(4, vec![(0, 1.0)]);
        assert_eq!(a.cosine_similarity(&b), 0.0);
    }

    #[test]
    fn test_normalize() {
        let mut v = SparseVector::from_pairs(4, vec![(0, 3.0), (2, 4.0)]);
        v.normalize();
        assert!((v.norm() - 1.0).abs() < 1e-6);
        assert!((v.get(0) - 0.6).abs() < 1e-6);

        let mut zero = SparseVector::zeros(4);
        zero.normalize();
        assert!(zero.is_zero());
    }
}
