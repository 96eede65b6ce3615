use std::collections::HashSet;

use serde::Serialize;

use crate::ontology::SkillOntology;

/// Side detail of the skill-match factor: which skills matched, which the
/// job still requires, and which the candidate brings on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillMatchDetails {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    pub match_percentage: f64,
    pub num_matched: usize,
    pub num_required: usize,
}

const EXTRA_SKILL_BONUS: f64 = 0.01;
const EXTRA_SKILL_BONUS_CAP: f64 = 0.1;

/// Normalized-set skill comparison with one level of hierarchy inference:
/// holding a child skill counts as holding its parent when the job asks for
/// the parent (knowing PyTorch satisfies a Machine Learning requirement).
pub fn score_skill_match(
    ontology: &SkillOntology,
    resume_skills: &[String],
    job_skills: &[String],
) -> (f64, SkillMatchDetails) {
    let mut resume_set: HashSet<String> =
        ontology.normalize_all(resume_skills).into_iter().collect();
    let job_set: HashSet<String> = ontology.normalize_all(job_skills).into_iter().collect();

    let inferred: Vec<String> = resume_set
        .iter()
        .flat_map(|skill| ontology.parents_of(skill))
        .filter(|parent| job_set.contains(*parent))
        .map(|parent| parent.to_string())
        .collect();
    resume_set.extend(inferred);

    let mut matched: Vec<String> = job_set.intersection(&resume_set).cloned().collect();
    let mut missing: Vec<String> = job_set.difference(&resume_set).cloned().collect();
    let mut extra: Vec<String> = resume_set.difference(&job_set).cloned().collect();
    matched.sort();
    missing.sort();
    extra.sort();

    let match_percentage = if job_set.is_empty() {
        0.0
    } else {
        matched.len() as f64 / job_set.len() as f64
    };

    let bonus = (extra.len() as f64 * EXTRA_SKILL_BONUS).min(EXTRA_SKILL_BONUS_CAP);
    let score = (match_percentage + bonus).min(1.0);

    let details = SkillMatchDetails {
        num_matched: matched.len(),
        num_required: job_set.len(),
        matched,
        missing,
        extra,
        match_percentage,
    };

    (score, details)
}
