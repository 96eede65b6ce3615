use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use serde::Serialize;
use tracing::info;

use crate::embedding::EmbeddingProvider;
use crate::error::MatchError;
use crate::ontology::SkillOntology;
use crate::{JobDescription, Resume};

use super::index::SimilarityIndex;

const SEMANTIC_WEIGHT: f64 = 0.6;
const SKILL_WEIGHT: f64 = 0.4;

/// Skill overlap between one resume and one job, with hierarchy-aware
/// matching: a required skill counts as matched when the resume has it or
/// any of its direct equivalents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillOverlap {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    /// Fraction of required skills the resume covers.
    pub skill_match_score: f64,
    /// Fraction of the resume's skills the job actually uses.
    pub skill_coverage: f64,
    pub num_matched: usize,
    pub num_required: usize,
}

/// One ranked hit from the index, with the stored record and the blended
/// ranking score.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<T> {
    pub id: String,
    pub record: T,
    pub semantic_score: f64,
    pub skill_match_score: f64,
    pub combined_score: f64,
    pub overlap: SkillOverlap,
}

/// Bidirectional ranking over embedding indexes: resumes against a job
/// corpus, or jobs against a resume corpus.
///
/// Indexes start unbuilt; querying before `build_*_index` is an error, an
/// empty built index is not. Rebuilding swaps the whole index atomically.
pub struct ResumeJobMatcher {
    embedder: Arc<dyn EmbeddingProvider>,
    ontology: Arc<SkillOntology>,
    job_index: RwLock<Option<SimilarityIndex<JobDescription>>>,
    resume_index: RwLock<Option<SimilarityIndex<Resume>>>,
}

impl ResumeJobMatcher {
    pub fn new(ontology: Arc<SkillOntology>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            embedder,
            ontology,
            job_index: RwLock::new(None),
            resume_index: RwLock::new(None),
        }
    }

    /// Replaces the job index with one built from the given jobs.
    /// Embeddings are computed before the write lock is taken.
    pub fn build_job_index(&self, jobs: impl IntoIterator<Item = (String, JobDescription)>) {
        let mut index = SimilarityIndex::new(self.embedder.dimension());
        for (id, job) in jobs {
            let emb = self.embedder.embed_job(&job);
            index.add(id, &emb.vector, job);
        }
        info!(jobs = index.len(), "job index built");
        *self.job_index.write().unwrap_or_else(|e| e.into_inner()) = Some(index);
    }

    pub fn build_resume_index(&self, resumes: impl IntoIterator<Item = (String, Resume)>) {
        let mut index = SimilarityIndex::new(self.embedder.dimension());
        for (id, resume) in resumes {
            let emb = self.embedder.embed_resume(&resume);
            index.add(id, &emb.vector, resume);
        }
        info!(resumes = index.len(), "resume index built");
        *self.resume_index.write().unwrap_or_else(|e| e.into_inner()) = Some(index);
    }

    /// Adds a single job to an already-built index.
    pub fn add_job(&self, id: impl Into<String>, job: JobDescription) -> Result<(), MatchError> {
        let emb = self.embedder.embed_job(&job);
        let mut guard = self.job_index.write().unwrap_or_else(|e| e.into_inner());
        let index = guard.as_mut().ok_or(MatchError::JobIndexNotBuilt)?;
        index.add(id, &emb.vector, job);
        Ok(())
    }

    pub fn add_resume(&self, id: impl Into<String>, resume: Resume) -> Result<(), MatchError> {
        let emb = self.embedder.embed_resume(&resume);
        let mut guard = self.resume_index.write().unwrap_or_else(|e| e.into_inner());
        let index = guard.as_mut().ok_or(MatchError::ResumeIndexNotBuilt)?;
        index.add(id, &emb.vector, resume);
        Ok(())
    }

    /// Top-k jobs for a resume, ranked by blended semantic and skill score.
    pub fn match_resume_to_jobs(
        &self,
        resume: &Resume,
        k: usize,
    ) -> Result<Vec<MatchResult<JobDescription>>, MatchError> {
        let query = self.embedder.embed_resume(resume);

        let guard = self.job_index.read().unwrap_or_else(|e| e.into_inner());
        let index = guard.as_ref().ok_or(MatchError::JobIndexNotBuilt)?;

        let mut results = Vec::new();
        for (id, semantic) in index.search(&query.vector, k) {
            let Some(job) = index.metadata(&id) else {
                continue;
            };
            let overlap = self.skill_overlap(&resume.technical_skills, &job.technical_skills);
            let semantic = (semantic as f64).max(0.0);
            let combined = SEMANTIC_WEIGHT * semantic + SKILL_WEIGHT * overlap.skill_match_score;
            results.push(MatchResult {
                id,
                record: job.clone(),
                semantic_score: semantic,
                skill_match_score: overlap.skill_match_score,
                combined_score: combined,
                overlap,
            });
        }

        results.sort_by(|a, b| {
            b.combined_score
                .partial_cmp(&a.combined_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(results)
    }

    /// Top-k resumes for a job. Same blend as the resume-to-jobs direction.
    pub fn match_job_to_resumes(
        &self,
        job: &JobDescription,
        k: usize,
    ) -> Result<Vec<MatchResult<Resume>>, MatchError> {
        let query = self.embedder.embed_job(job);

        let guard = self.resume_index.read().unwrap_or_else(|e| e.into_inner());
        let index = guard.as_ref().ok_or(MatchError::ResumeIndexNotBuilt)?;

        let mut results = Vec::new();
        for (id, semantic) in index.search(&query.vector, k) {
            let Some(resume) = index.metadata(&id) else {
                continue;
            };
            let overlap = self.skill_overlap(&resume.technical_skills, &job.technical_skills);
            let semantic = (semantic as f64).max(0.0);
            let combined = SEMANTIC_WEIGHT * semantic + SKILL_WEIGHT * overlap.skill_match_score;
            results.push(MatchResult {
                id,
                record: resume.clone(),
                semantic_score: semantic,
                skill_match_score: overlap.skill_match_score,
                combined_score: combined,
                overlap,
            });
        }

        results.sort_by(|a, b| {
            b.combined_score
                .partial_cmp(&a.combined_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(results)
    }

    /// Overlap between resume and job skill sets. A required skill is
    /// matched when any of its equivalents (itself or its direct children
    /// in the hierarchy) appears on the resume.
    pub fn skill_overlap(&self, resume_skills: &[String], job_skills: &[String]) -> SkillOverlap {
        let resume_set: HashSet<String> = self
            .ontology
            .normalize_all(resume_skills)
            .into_iter()
            .collect();
        let job_normalized = self.ontology.normalize_all(job_skills);

        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for skill in &job_normalized {
            let equivalents = self.ontology.equivalent_skills(skill);
            if equivalents.iter().any(|eq| resume_set.contains(eq)) {
                matched.push(skill.clone());
            } else {
                missing.push(skill.clone());
            }
        }

        let matched_set: HashSet<&String> = matched.iter().collect();
        let mut extra: Vec<String> = resume_set
            .iter()
            .filter(|s| !matched_set.contains(s) && !job_normalized.contains(s))
            .cloned()
            .collect();
        extra.sort();

        let skill_match_score = if job_normalized.is_empty() {
            0.0
        } else {
            matched.len() as f64 / job_normalized.len() as f64
        };
        let skill_coverage = if resume_set.is_empty() {
            0.0
        } else {
            matched.len() as f64 / resume_set.len() as f64
        };

        SkillOverlap {
            num_matched: matched.len(),
            num_required: job_normalized.len(),
            matched,
            missing,
            extra,
            skill_match_score,
            skill_coverage,
        }
    }
}
