//! Human-readable explanations of match outcomes.
//!
//! A pluggable language model writes the prose when available; template
//! fallbacks keep the feature working offline or when the model errors.

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::warn;

use crate::embedding::{cosine_similarity, EmbeddingProvider};
use crate::error::ExplainError;
use crate::scoring::ScoreBreakdown;
use crate::Resume;

/// Text-generation backend for explanation prose.
pub trait LanguageModel: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, ExplainError>;
}

/// A labeled slice of resume text used as retrieval context for prompts.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeChunk {
    pub section: &'static str,
    pub text: String,
}

const WEAK_FACTOR_THRESHOLD: f64 = 0.6;
const STRONG_MATCH_THRESHOLD: f64 = 0.7;
const MODERATE_MATCH_THRESHOLD: f64 = 0.5;

pub struct MatchExplainer {
    llm: Option<Arc<dyn LanguageModel>>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl MatchExplainer {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, llm: Option<Arc<dyn LanguageModel>>) -> Self {
        Self { llm, embedder }
    }

    /// Explains an overall match result. LLM failures degrade to the
    /// template text with a warning, never to an error.
    pub fn explain_match(&self, resume: &Resume, job_title: &str, breakdown: &ScoreBreakdown) -> String {
        let details = &breakdown.skill_match.details;

        if let Some(llm) = &self.llm {
            let context = self.retrieve_context(resume, &details.matched, 3);
            let prompt = build_match_prompt(job_title, breakdown, &context);
            match llm.generate(&prompt) {
                Ok(text) => return text,
                Err(err) => {
                    warn!(error = %err, "language model failed, using template explanation");
                }
            }
        }

        fallback_explanation(breakdown.total_score, &details.matched, &details.missing)
    }

    /// Explains the weakest side of a poor match.
    pub fn explain_why_not_fit(&self, job_title: &str, breakdown: &ScoreBreakdown) -> String {
        let factors = [
            ("skill match", breakdown.skill_match.score),
            ("semantic similarity", breakdown.semantic_similarity.score),
            ("experience", breakdown.experience.score),
            ("title similarity", breakdown.title_similarity.score),
            ("skill depth", breakdown.skill_depth.score),
        ];

        let weak: Vec<(&str, f64)> = factors
            .iter()
            .copied()
            .filter(|(_, score)| *score < WEAK_FACTOR_THRESHOLD)
            .collect();

        let Some((weakest_name, weakest_score)) = weak
            .iter()
            .copied()
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        else {
            return format!(
                "No significant weaknesses found. This profile is a good fit for the {job_title} role."
            );
        };

        if let Some(llm) = &self.llm {
            let prompt = build_why_not_prompt(job_title, breakdown, &weak);
            match llm.generate(&prompt) {
                Ok(text) => return text,
                Err(err) => {
                    warn!(error = %err, "language model failed, using template gap analysis");
                }
            }
        }

        let mut out = format!(
            "The main issue is {weakest_name} (scoring only {:.0}%). ",
            weakest_score * 100.0
        );
        if weakest_name == "skill match" && !breakdown.skill_match.details.missing.is_empty() {
            let _ = write!(
                out,
                "Key skills missing for the {job_title} role: {}.",
                breakdown.skill_match.details.missing.join(", ")
            );
        } else {
            let _ = write!(
                out,
                "Strengthening this area would improve the fit for the {job_title} role."
            );
        }
        out
    }

    /// Splits a resume into labeled chunks for retrieval.
    pub fn chunk_resume(&self, resume: &Resume) -> Vec<ResumeChunk> {
        let mut chunks = Vec::new();

        if !resume.technical_skills.is_empty() {
            chunks.push(ResumeChunk {
                section: "skills",
                text: format!("Skills: {}", resume.technical_skills.join(", ")),
            });
        }
        for exp in &resume.experience {
            let mut text = String::new();
            if let Some(role) = &exp.role {
                text.push_str(role);
            }
            if let Some(company) = &exp.company {
                if !text.is_empty() {
                    text.push_str(" at ");
                }
                text.push_str(company);
            }
            if let Some(description) = &exp.description {
                if !text.is_empty() {
                    text.push_str(". ");
                }
                text.push_str(description);
            }
            if !exp.technologies.is_empty() {
                let _ = write!(text, " Technologies: {}", exp.technologies.join(", "));
            }
            if !text.is_empty() {
                chunks.push(ResumeChunk {
                    section: "experience",
                    text,
                });
            }
        }
        for project in &resume.projects {
            let mut text = String::new();
            if let Some(title) = &project.title {
                text.push_str(title);
            }
            if let Some(description) = &project.description {
                if !text.is_empty() {
                    text.push_str(": ");
                }
                text.push_str(description);
            }
            if !text.is_empty() {
                chunks.push(ResumeChunk {
                    section: "project",
                    text,
                });
            }
        }
        for edu in &resume.education {
            if let (Some(degree), Some(institution)) = (&edu.degree, &edu.institution) {
                chunks.push(ResumeChunk {
                    section: "education",
                    text: format!("{degree} from {institution}"),
                });
            }
        }

        chunks
    }

    /// Top-k resume chunks most similar to the matched-skills query.
    fn retrieve_context(&self, resume: &Resume, matched_skills: &[String], k: usize) -> Vec<ResumeChunk> {
        let chunks = self.chunk_resume(resume);
        if chunks.is_empty() || matched_skills.is_empty() {
            return chunks.into_iter().take(k).collect();
        }

        let query = self.embedder.embed_text(&matched_skills.join(" "));
        let mut scored: Vec<(f64, ResumeChunk)> = chunks
            .into_iter()
            .map(|chunk| {
                let emb = self.embedder.embed_text(&chunk.text);
                (cosine_similarity(&query.vector, &emb.vector), chunk)
            })
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().take(k).map(|(_, chunk)| chunk).collect()
    }
}

fn build_match_prompt(job_title: &str, breakdown: &ScoreBreakdown, context: &[ResumeChunk]) -> String {
    let details = &breakdown.skill_match.details;
    let mut prompt = String::from(
        "You are a career advisor. Explain to a candidate how well their profile matches a job, in 3-4 sentences, encouraging but honest.\n\n",
    );
    let _ = writeln!(prompt, "Job: {job_title}");
    let _ = writeln!(prompt, "Overall match: {:.0}%", breakdown.total_score * 100.0);
    let _ = writeln!(prompt, "Matched skills: {}", details.matched.join(", "));
    let _ = writeln!(prompt, "Missing skills: {}", details.missing.join(", "));
    if !context.is_empty() {
        let _ = writeln!(prompt, "\nRelevant resume excerpts:");
        for chunk in context {
            let _ = writeln!(prompt, "- [{}] {}", chunk.section, chunk.text);
        }
    }
    prompt
}

fn build_why_not_prompt(job_title: &str, breakdown: &ScoreBreakdown, weak: &[(&str, f64)]) -> String {
    let mut prompt = String::from(
        "You are a career advisor. Explain concisely why this profile falls short of a job, and what to improve first.\n\n",
    );
    let _ = writeln!(prompt, "Job: {job_title}");
    let _ = writeln!(prompt, "Overall match: {:.0}%", breakdown.total_score * 100.0);
    let _ = writeln!(prompt, "Weak areas:");
    for (name, score) in weak {
        let _ = writeln!(prompt, "- {name}: {:.0}%", score * 100.0);
    }
    if !breakdown.skill_match.details.missing.is_empty() {
        let _ = writeln!(
            prompt,
            "Missing skills: {}",
            breakdown.skill_match.details.missing.join(", ")
        );
    }
    prompt
}

/// Template explanation used when no language model is configured.
pub fn fallback_explanation(total_score: f64, matched: &[String], missing: &[String]) -> String {
    let matched_list = if matched.is_empty() {
        "none of the listed requirements".to_string()
    } else {
        matched.join(", ")
    };

    if total_score >= STRONG_MATCH_THRESHOLD {
        let mut out = format!(
            "Strong match! You have {} of the key skills required for this role, including {matched_list}.",
            matched.len()
        );
        if !missing.is_empty() {
            let _ = write!(
                out,
                " Closing the gap on {} would make your profile even stronger.",
                missing.join(", ")
            );
        }
        out
    } else if total_score >= MODERATE_MATCH_THRESHOLD {
        format!(
            "Moderate match. You possess {} relevant skills ({matched_list}), but the role also asks for {}. A focused learning plan could close this gap.",
            matched.len(),
            missing.join(", ")
        )
    } else {
        format!(
            "This role is currently a stretch. You match {} of its requirements, while {} key skills are missing: {}. Consider building these before applying.",
            matched.len(),
            missing.len(),
            missing.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::HashEmbedder;
    use crate::ontology::SkillOntology;
    use crate::scoring::WeightedScorer;
    use crate::{JobDescription, WorkExperience};

    struct CannedModel(&'static str);

    impl LanguageModel for CannedModel {
        fn generate(&self, _prompt: &str) -> Result<String, ExplainError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingModel;

    impl LanguageModel for FailingModel {
        fn generate(&self, _prompt: &str) -> Result<String, ExplainError> {
            Err(ExplainError::Llm("rate limited".to_string()))
        }
    }

    fn breakdown_for(resume: &Resume, job: &JobDescription, semantic: f64) -> ScoreBreakdown {
        WeightedScorer::new(
            Arc::new(SkillOntology::new()),
            Arc::new(HashEmbedder::default()),
        )
        .unwrap()
        .score(resume, job, semantic)
    }

    fn sample_resume() -> Resume {
        Resume {
            technical_skills: vec!["Python".into(), "SQL".into()],
            total_experience_years: Some(3.0),
            experience: vec![WorkExperience {
                role: Some("Data Analyst".into()),
                company: Some("Acme".into()),
                technologies: vec!["Python".into(), "SQL".into()],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn sample_job() -> JobDescription {
        JobDescription {
            job_title: "Data Scientist".into(),
            technical_skills: vec!["Python".into(), "Machine Learning".into()],
            experience_required: "2-4 years".into(),
            ..Default::default()
        }
    }

    #[test]
    fn uses_llm_text_when_available() {
        let explainer = MatchExplainer::new(
            Arc::new(HashEmbedder::default()),
            Some(Arc::new(CannedModel("model says hi"))),
        );
        let breakdown = breakdown_for(&sample_resume(), &sample_job(), 0.8);
        let text = explainer.explain_match(&sample_resume(), "Data Scientist", &breakdown);
        assert_eq!(text, "model says hi");
    }

    #[test]
    fn llm_failure_falls_back_to_template() {
        let explainer = MatchExplainer::new(
            Arc::new(HashEmbedder::default()),
            Some(Arc::new(FailingModel)),
        );
        let breakdown = breakdown_for(&sample_resume(), &sample_job(), 0.8);
        let text = explainer.explain_match(&sample_resume(), "Data Scientist", &breakdown);
        assert!(text.contains("match"), "unexpected text: {text}");
        assert!(text.contains("Python"));
    }

    #[test]
    fn fallback_tiers_by_score() {
        let matched = vec!["Python".to_string()];
        let missing = vec!["AWS".to_string()];
        assert!(fallback_explanation(0.8, &matched, &missing).starts_with("Strong match!"));
        assert!(fallback_explanation(0.6, &matched, &missing).starts_with("Moderate match."));
        assert!(fallback_explanation(0.3, &matched, &missing).contains("stretch"));
    }

    #[test]
    fn why_not_fit_names_weakest_factor() {
        let weak_resume = Resume {
            technical_skills: vec!["Photoshop".into()],
            total_experience_years: Some(3.0),
            ..Default::default()
        };
        let explainer = MatchExplainer::new(Arc::new(HashEmbedder::default()), None);
        let breakdown = breakdown_for(&weak_resume, &sample_job(), 0.1);
        let text = explainer.explain_why_not_fit("Data Scientist", &breakdown);
        assert!(text.starts_with("The main issue is"), "unexpected: {text}");
    }

    #[test]
    fn good_fit_reports_no_weakness() {
        let strong_resume = Resume {
            technical_skills: vec!["Python".into(), "Machine Learning".into()],
            total_experience_years: Some(3.0),
            experience: vec![WorkExperience {
                role: Some("Data Scientist".into()),
                technologies: vec!["Python".into(), "Machine Learning".into()],
                ..Default::default()
            }],
            projects: vec![crate::ProjectEntry {
                title: Some("Churn model".into()),
                technologies: vec!["Python".into(), "Machine Learning".into()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let explainer = MatchExplainer::new(Arc::new(HashEmbedder::default()), None);
        let breakdown = breakdown_for(&strong_resume, &sample_job(), 0.9);
        let text = explainer.explain_why_not_fit("Data Scientist", &breakdown);
        assert!(text.contains("good fit"), "unexpected: {text}");
    }

    #[test]
    fn chunks_cover_all_sections() {
        let mut resume = sample_resume();
        resume.projects = vec![crate::ProjectEntry {
            title: Some("Dashboard".into()),
            description: Some("Sales analytics".into()),
            ..Default::default()
        }];
        resume.education = vec![crate::Education {
            degree: Some("BSc Computer Science".into()),
            institution: Some("State University".into()),
            ..Default::default()
        }];

        let explainer = MatchExplainer::new(Arc::new(HashEmbedder::default()), None);
        let chunks = explainer.chunk_resume(&resume);
        let sections: Vec<&str> = chunks.iter().map(|c| c.section).collect();
        assert!(sections.contains(&"skills"));
        assert!(sections.contains(&"experience"));
        assert!(sections.contains(&"project"));
        assert!(sections.contains(&"education"));
    }
}
