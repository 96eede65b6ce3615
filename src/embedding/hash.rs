use std::hash::{Hash, Hasher};

use siphasher::sip::SipHasher13;

use super::{Embedding, EmbeddingProvider, EmbeddingSource};

// Fixed seeds keep the hash deterministic across processes and Rust
// versions. Changing either value changes every produced embedding.
const HASH_SEED_K0: u64 = 0x0123_4567_89ab_cdef;
const HASH_SEED_K1: u64 = 0xfedc_ba98_7654_3210;

const DEFAULT_DIMENSION: usize = 384;

/// Feature-hashing embedding provider.
///
/// No model weights, no network: tokens are sign-hashed into a fixed-size
/// vector and L2-normalized. Useful as the offline/default provider and in
/// tests; a hosted sentence-embedding service can be swapped in behind the
/// same trait.
pub struct HashEmbedder {
    dimension: usize,
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl HashEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    fn hash_token(&self, token: &str) -> usize {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.dimension
    }

    fn tokens_to_vector(&self, tokens: impl Iterator<Item = String>) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];

        for token in tokens {
            let idx = self.hash_token(&token);
            // Sign hashing: even hash of "<token>_sign" adds, odd subtracts.
            let sign = if self.hash_token(&format!("{token}_sign")) % 2 == 0 {
                1.0
            } else {
                -1.0
            };
            vector[idx] += sign;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        vector
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

impl EmbeddingProvider for HashEmbedder {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed_text(&self, text: &str) -> Embedding {
        Embedding {
            vector: self.tokens_to_vector(tokenize(text)),
            source: EmbeddingSource::Text,
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::cosine_similarity;

    #[test]
    fn produces_unit_vectors() {
        let embedder = HashEmbedder::default();
        let emb = embedder.embed_text("python machine learning sql");

        let norm: f32 = emb.vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "L2 norm should be 1.0, got {norm}");
        assert_eq!(emb.vector.len(), 384);
    }

    #[test]
    fn identical_text_embeds_identically() {
        let embedder = HashEmbedder::default();
        let a = embedder.embed_text("Senior Data Scientist");
        let b = embedder.embed_text("Senior Data Scientist");
        assert_eq!(a.vector, b.vector);
    }

    #[test]
    fn shared_vocabulary_scores_higher() {
        let embedder = HashEmbedder::default();

        let job = embedder.embed_text("python machine learning aws docker");
        let close = embedder.embed_text("python machine learning pandas");
        let far = embedder.embed_text("cobol mainframe fortran");

        let close_sim = cosine_similarity(&job.vector, &close.vector);
        let far_sim = cosine_similarity(&job.vector, &far.vector);
        assert!(
            close_sim > far_sim,
            "expected {close_sim} > {far_sim}"
        );
    }

    #[test]
    fn empty_text_embeds_to_zero_vector() {
        let embedder = HashEmbedder::new(16);
        let emb = embedder.embed_text("");
        assert!(emb.vector.iter().all(|v| *v == 0.0));
    }
}
