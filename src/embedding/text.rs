//! Deterministic text representations fed to an embedding provider.
//!
//! Part ordering is fixed (skills, experience, projects, education, summary
//! for resumes; title, skills, experience line for jobs): the resulting
//! vector depends on it, so it must stay stable across releases.

use crate::{JobDescription, Resume};

const PART_SEPARATOR: &str = " | ";

pub fn resume_embedding_text(resume: &Resume) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !resume.technical_skills.is_empty() {
        parts.push(format!("Skills: {}", resume.technical_skills.join(", ")));
    }

    for exp in &resume.experience {
        parts.push(format!(
            "{} at {}",
            exp.role.as_deref().unwrap_or(""),
            exp.company.as_deref().unwrap_or("")
        ));
        if !exp.technologies.is_empty() {
            parts.push(format!("Technologies: {}", exp.technologies.join(", ")));
        }
    }

    for proj in &resume.projects {
        parts.push(format!(
            "Project: {} - {}",
            proj.title.as_deref().unwrap_or(""),
            proj.description.as_deref().unwrap_or("")
        ));
        if !proj.technologies.is_empty() {
            parts.push(format!("Tech: {}", proj.technologies.join(", ")));
        }
    }

    for edu in &resume.education {
        parts.push(format!(
            "{} from {}",
            edu.degree.as_deref().unwrap_or(""),
            edu.institution.as_deref().unwrap_or("")
        ));
    }

    if let Some(summary) = &resume.summary {
        parts.push(summary.clone());
    }

    parts.join(PART_SEPARATOR)
}

pub fn job_embedding_text(job: &JobDescription) -> String {
    let mut parts: Vec<String> = vec![format!("Job: {}", job.job_title)];

    if !job.technical_skills.is_empty() {
        parts.push(format!(
            "Required Skills: {}",
            job.technical_skills.join(", ")
        ));
    }

    parts.push(format!("Experience: {}", job.experience_required));

    parts.join(PART_SEPARATOR)
}
