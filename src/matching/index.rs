use std::collections::HashMap;

use tracing::warn;

/// In-memory inner-product index over unit-normalized vectors, with a
/// metadata record per entry. Vectors are stored flat, row-major.
///
/// Built once and swapped in whole; readers never see a partial index.
#[derive(Debug, Clone)]
pub struct SimilarityIndex<M> {
    dimension: usize,
    vectors: Vec<f32>,
    ids: Vec<String>,
    metadata: HashMap<String, M>,
}

impl<M> SimilarityIndex<M> {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: Vec::new(),
            ids: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Adds one entry. The vector is normalized on insert so search reduces
    /// to a dot product; a dimension mismatch drops the entry with a warning
    /// rather than poisoning the index.
    pub fn add(&mut self, id: impl Into<String>, vector: &[f32], record: M) {
        let id = id.into();
        if vector.len() != self.dimension {
            warn!(
                id = %id,
                expected = self.dimension,
                got = vector.len(),
                "skipping entry with wrong embedding dimension"
            );
            return;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            self.vectors.extend(vector.iter().map(|x| x / norm));
        } else {
            self.vectors.extend_from_slice(vector);
        }
        self.metadata.insert(id.clone(), record);
        self.ids.push(id);
    }

    pub fn add_batch(&mut self, entries: impl IntoIterator<Item = (String, Vec<f32>, M)>) {
        for (id, vector, record) in entries {
            self.add(id, &vector, record);
        }
    }

    /// Top-k entries by cosine similarity to the query, descending. The sort
    /// is stable, so equal scores keep insertion order.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<(String, f32)> {
        if query.len() != self.dimension {
            warn!(
                expected = self.dimension,
                got = query.len(),
                "query vector has wrong dimension"
            );
            return Vec::new();
        }

        let norm: f32 = query.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm == 0.0 {
            return Vec::new();
        }

        let mut scored: Vec<(String, f32)> = self
            .ids
            .iter()
            .enumerate()
            .map(|(row, id)| {
                let start = row * self.dimension;
                let dot: f32 = self.vectors[start..start + self.dimension]
                    .iter()
                    .zip(query)
                    .map(|(a, b)| a * b)
                    .sum();
                (id.clone(), dot / norm)
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        scored
    }

    pub fn metadata(&self, id: &str) -> Option<&M> {
        self.metadata.get(id)
    }
}
