use std::sync::Arc;

use serde::Serialize;

use crate::embedding::EmbeddingProvider;
use crate::error::{MatchError, ParseError};
use crate::explain::{LanguageModel, MatchExplainer};
use crate::extraction::DocumentParser;
use crate::ontology::SkillOntology;
use crate::roadmap::{Roadmap, RoadmapGenerator};
use crate::scoring::{ScoreBreakdown, WeightedScorer};
use crate::{JobDescription, Resume};

const GOOD_FIT_THRESHOLD: f64 = 0.8;

/// Everything the caller needs from one resume-against-job evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub breakdown: ScoreBreakdown,
    pub explanation: String,
    /// Present only when the total score falls below the good-fit bar.
    pub why_not_fit: Option<String>,
    /// Present only when required skills are missing.
    pub roadmap: Option<Roadmap>,
}

/// Facade wiring scorer, explainer and roadmap generator together behind
/// one call.
pub struct MatchPipeline {
    scorer: WeightedScorer,
    explainer: MatchExplainer,
    roadmap: RoadmapGenerator,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl MatchPipeline {
    pub fn new(
        ontology: Arc<SkillOntology>,
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Option<Arc<dyn LanguageModel>>,
    ) -> Result<Self, MatchError> {
        let scorer = WeightedScorer::new(ontology, Arc::clone(&embedder))?;
        let explainer = MatchExplainer::new(Arc::clone(&embedder), llm);
        Ok(Self {
            scorer,
            explainer,
            roadmap: RoadmapGenerator::new(),
            embedder,
        })
    }

    /// Scores one resume against one job and derives explanation and
    /// roadmap from the breakdown.
    pub fn evaluate(&self, resume: &Resume, job: &JobDescription) -> MatchReport {
        let resume_emb = self.embedder.embed_resume(resume);
        let job_emb = self.embedder.embed_job(job);
        let semantic = self.embedder.similarity(&resume_emb, &job_emb).max(0.0);

        let breakdown = self.scorer.score(resume, job, semantic);

        let explanation = self
            .explainer
            .explain_match(resume, &job.job_title, &breakdown);

        let why_not_fit = (breakdown.total_score < GOOD_FIT_THRESHOLD)
            .then(|| self.explainer.explain_why_not_fit(&job.job_title, &breakdown));

        let missing = &breakdown.skill_match.details.missing;
        let roadmap = (!missing.is_empty()).then(|| {
            self.roadmap
                .generate(missing, &job.job_title, Some(resume.technical_skills.as_slice()))
        });

        MatchReport {
            breakdown,
            explanation,
            why_not_fit,
            roadmap,
        }
    }

    /// Parses a raw job posting and evaluates the resume against it.
    pub fn evaluate_job_text(
        &self,
        parser: &dyn DocumentParser,
        resume: &Resume,
        job_text: &str,
    ) -> Result<MatchReport, ParseError> {
        let job = parser.parse_job_text(job_text)?;
        Ok(self.evaluate(resume, &job))
    }

    pub fn roadmap_generator(&self) -> &RoadmapGenerator {
        &self.roadmap
    }
}
