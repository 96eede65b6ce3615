//! Embedding providers and vector similarity.
//!
//! Everything downstream (matching, title scoring, explanation retrieval)
//! talks to [`EmbeddingProvider`], so the concrete backend can change
//! without touching the scoring code.

pub mod hash;
pub mod similarity;
pub mod text;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{JobDescription, Resume};

pub use hash::HashEmbedder;
pub use similarity::cosine_similarity;
pub use text::{job_embedding_text, resume_embedding_text};

/// What kind of document an embedding vector was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddingSource {
    Resume,
    Job,
    Text,
}

/// A dense vector plus enough provenance to debug a bad match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embedding {
    pub vector: Vec<f32>,
    pub source: EmbeddingSource,
    pub created_at: DateTime<Utc>,
}

/// Contract every embedding backend must satisfy.
///
/// Implementations must be deterministic for equal input text within one
/// process lifetime and must always return vectors of [`dimension`] length.
///
/// [`dimension`]: EmbeddingProvider::dimension
pub trait EmbeddingProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn dimension(&self) -> usize;

    fn embed_text(&self, text: &str) -> Embedding;

    fn embed_resume(&self, resume: &Resume) -> Embedding {
        let mut emb = self.embed_text(&resume_embedding_text(resume));
        emb.source = EmbeddingSource::Resume;
        emb
    }

    fn embed_job(&self, job: &JobDescription) -> Embedding {
        let mut emb = self.embed_text(&job_embedding_text(job));
        emb.source = EmbeddingSource::Job;
        emb
    }

    /// Cosine similarity between two embeddings, in [-1.0, 1.0].
    ///
    /// Embeddings from providers with different dimensions never compare;
    /// the mismatch is logged and scored 0.0.
    fn similarity(&self, a: &Embedding, b: &Embedding) -> f64 {
        cosine_similarity(&a.vector, &b.vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resume() -> Resume {
        Resume {
            technical_skills: vec!["Python".into(), "SQL".into()],
            ..Default::default()
        }
    }

    fn sample_job() -> JobDescription {
        JobDescription {
            job_title: "Data Analyst".into(),
            technical_skills: vec!["SQL".into(), "Excel".into()],
            experience_required: "2-4 years".into(),
            ..Default::default()
        }
    }

    #[test]
    fn embed_resume_tags_source() {
        let embedder = HashEmbedder::new(64);
        let emb = embedder.embed_resume(&sample_resume());
        assert_eq!(emb.source, EmbeddingSource::Resume);
        assert_eq!(emb.vector.len(), 64);
    }

    #[test]
    fn embed_job_tags_source() {
        let embedder = HashEmbedder::new(64);
        let emb = embedder.embed_job(&sample_job());
        assert_eq!(emb.source, EmbeddingSource::Job);
    }

    #[test]
    fn similarity_of_identical_embeddings_is_one() {
        let embedder = HashEmbedder::new(64);
        let emb = embedder.embed_text("python pandas sql");
        let sim = embedder.similarity(&emb, &emb);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn mismatched_dimensions_score_zero() {
        let small = HashEmbedder::new(16);
        let large = HashEmbedder::new(32);
        let a = small.embed_text("python");
        let b = large.embed_text("python");
        assert_eq!(small.similarity(&a, &b), 0.0);
    }
}
