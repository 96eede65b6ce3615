use std::fmt::Write as _;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::embedding::EmbeddingProvider;
use crate::error::MatchError;
use crate::ontology::SkillOntology;
use crate::{JobDescription, Resume};

use super::depth::{score_skill_depth, DepthDetails};
use super::experience::{score_experience, ExperienceDetails};
use super::skills::{score_skill_match, SkillMatchDetails};
use super::title::{score_title_similarity, TitleDetails};
use super::weights::Weights;

/// One scored factor: its raw score in [0, 1], the weight it carries in the
/// composite, and factor-specific evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Factor<D> {
    pub score: f64,
    pub weight: f64,
    pub details: D,
}

/// Full decomposition of a resume-against-job score. Serializes cleanly for
/// API responses and drives both the roadmap and the explanation text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub total_score: f64,
    pub skill_match: Factor<SkillMatchDetails>,
    pub semantic_similarity: Factor<()>,
    pub experience: Factor<ExperienceDetails>,
    pub title_similarity: Factor<TitleDetails>,
    pub skill_depth: Factor<DepthDetails>,
}

impl ScoreBreakdown {
    /// Plain-text report for CLI output and logs.
    pub fn format_plain(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Overall score: {:.1}%", self.total_score * 100.0);
        let _ = writeln!(
            out,
            "  Skill match:         {:.1}% (weight {:.2}) - {}/{} required skills",
            self.skill_match.score * 100.0,
            self.skill_match.weight,
            self.skill_match.details.num_matched,
            self.skill_match.details.num_required,
        );
        let _ = writeln!(
            out,
            "  Semantic similarity: {:.1}% (weight {:.2})",
            self.semantic_similarity.score * 100.0,
            self.semantic_similarity.weight,
        );
        let _ = writeln!(
            out,
            "  Experience:          {:.1}% (weight {:.2}) - {}",
            self.experience.score * 100.0,
            self.experience.weight,
            self.experience.details.status,
        );
        let _ = writeln!(
            out,
            "  Title similarity:    {:.1}% (weight {:.2})",
            self.title_similarity.score * 100.0,
            self.title_similarity.weight,
        );
        let _ = writeln!(
            out,
            "  Skill depth:         {:.1}% (weight {:.2})",
            self.skill_depth.score * 100.0,
            self.skill_depth.weight,
        );
        if !self.skill_match.details.missing.is_empty() {
            let _ = writeln!(
                out,
                "  Missing skills: {}",
                self.skill_match.details.missing.join(", "),
            );
        }
        out
    }
}

/// Combines the five factor scores under a validated weight set.
pub struct WeightedScorer {
    ontology: Arc<SkillOntology>,
    embedder: Arc<dyn EmbeddingProvider>,
    weights: Weights,
}

impl std::fmt::Debug for WeightedScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedScorer")
            .field("embedder", &self.embedder.name())
            .field("weights", &self.weights)
            .finish_non_exhaustive()
    }
}

impl WeightedScorer {
    pub fn new(
        ontology: Arc<SkillOntology>,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self, MatchError> {
        Self::with_weights(ontology, embedder, Weights::default())
    }

    pub fn with_weights(
        ontology: Arc<SkillOntology>,
        embedder: Arc<dyn EmbeddingProvider>,
        weights: Weights,
    ) -> Result<Self, MatchError> {
        weights.validate()?;
        Ok(Self {
            ontology,
            embedder,
            weights,
        })
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Scores a resume against a job. The semantic similarity between the
    /// two documents is precomputed by the caller so batch flows can reuse
    /// index lookups instead of re-embedding.
    pub fn score(
        &self,
        resume: &Resume,
        job: &JobDescription,
        semantic_similarity: f64,
    ) -> ScoreBreakdown {
        let semantic = semantic_similarity.clamp(0.0, 1.0);

        let (skill_score, skill_details) = score_skill_match(
            &self.ontology,
            &resume.technical_skills,
            &job.technical_skills,
        );
        let (exp_score, exp_details) =
            score_experience(resume.total_experience_years, &job.experience_required);
        let (title_score, title_details) =
            score_title_similarity(self.embedder.as_ref(), &resume.roles(), &job.job_title);
        let (depth_score, depth_details) = score_skill_depth(resume, job);

        let w = &self.weights;
        let total_score = w.skill_match * skill_score
            + w.semantic_similarity * semantic
            + w.experience * exp_score
            + w.title_similarity * title_score
            + w.skill_depth * depth_score;

        debug!(
            job_title = %job.job_title,
            total = total_score,
            skill = skill_score,
            semantic,
            experience = exp_score,
            title = title_score,
            depth = depth_score,
            "scored resume against job"
        );

        ScoreBreakdown {
            total_score,
            skill_match: Factor {
                score: skill_score,
                weight: w.skill_match,
                details: skill_details,
            },
            semantic_similarity: Factor {
                score: semantic,
                weight: w.semantic_similarity,
                details: (),
            },
            experience: Factor {
                score: exp_score,
                weight: w.experience,
                details: exp_details,
            },
            title_similarity: Factor {
                score: title_score,
                weight: w.title_similarity,
                details: title_details,
            },
            skill_depth: Factor {
                score: depth_score,
                weight: w.skill_depth,
                details: depth_details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::HashEmbedder;
    use crate::WorkExperience;

    fn scorer() -> WeightedScorer {
        WeightedScorer::new(
            Arc::new(SkillOntology::new()),
            Arc::new(HashEmbedder::default()),
        )
        .unwrap()
    }

    fn strong_resume() -> Resume {
        Resume {
            technical_skills: vec!["Python".into(), "Machine Learning".into(), "AWS".into()],
            total_experience_years: Some(4.0),
            experience: vec![WorkExperience {
                role: Some("Data Scientist".into()),
                technologies: vec!["Python".into(), "AWS".into()],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn sample_job() -> JobDescription {
        JobDescription {
            job_title: "Data Scientist".into(),
            technical_skills: vec!["Python".into(), "Machine Learning".into(), "AWS".into()],
            experience_required: "3-5 years".into(),
            ..Default::default()
        }
    }

    #[test]
    fn perfect_candidate_scores_high() {
        let breakdown = scorer().score(&strong_resume(), &sample_job(), 0.9);
        assert!(breakdown.total_score > 0.8, "got {}", breakdown.total_score);
        assert_eq!(breakdown.skill_match.details.num_matched, 3);
        assert!(breakdown.skill_match.details.missing.is_empty());
        assert_eq!(breakdown.experience.details.status, "Perfect match");
    }

    #[test]
    fn total_is_weighted_sum_of_factors() {
        let breakdown = scorer().score(&strong_resume(), &sample_job(), 0.5);
        let expected = breakdown.skill_match.score * breakdown.skill_match.weight
            + breakdown.semantic_similarity.score * breakdown.semantic_similarity.weight
            + breakdown.experience.score * breakdown.experience.weight
            + breakdown.title_similarity.score * breakdown.title_similarity.weight
            + breakdown.skill_depth.score * breakdown.skill_depth.weight;
        assert!((breakdown.total_score - expected).abs() < 1e-9);
    }

    #[test]
    fn semantic_input_is_clamped() {
        let breakdown = scorer().score(&strong_resume(), &sample_job(), -0.4);
        assert_eq!(breakdown.semantic_similarity.score, 0.0);
        let breakdown = scorer().score(&strong_resume(), &sample_job(), 1.7);
        assert_eq!(breakdown.semantic_similarity.score, 1.0);
    }

    #[test]
    fn invalid_weights_are_rejected_at_construction() {
        let bad = Weights {
            skill_match: 0.9,
            ..Weights::default()
        };
        let err = WeightedScorer::with_weights(
            Arc::new(SkillOntology::new()),
            Arc::new(HashEmbedder::default()),
            bad,
        )
        .unwrap_err();
        assert!(matches!(err, MatchError::InvalidWeights { .. }));
    }

    #[test]
    fn breakdown_serializes_to_json() {
        let breakdown = scorer().score(&strong_resume(), &sample_job(), 0.8);
        let json = serde_json::to_value(&breakdown).unwrap();
        assert!(json["total_score"].is_f64());
        assert!(json["skill_match"]["details"]["matched"].is_array());
        assert!(json["semantic_similarity"]["details"].is_null());
    }

    #[test]
    fn plain_report_mentions_missing_skills() {
        let resume = Resume {
            technical_skills: vec!["Python".into()],
            ..Default::default()
        };
        let breakdown = scorer().score(&resume, &sample_job(), 0.3);
        let report = breakdown.format_plain();
        assert!(report.contains("Overall score:"));
        assert!(report.contains("Missing skills:"));
        assert!(report.contains("AWS"));
    }
}
