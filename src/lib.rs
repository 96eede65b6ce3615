pub mod embedding;
pub mod error;
pub mod explain;
pub mod extraction;
pub mod logging;
pub mod matching;
pub mod ontology;
pub mod roadmap;
pub mod scoring;

use serde::{Deserialize, Serialize};

// Commonly used data models for matching functions. Produced once by an
// external parser and consumed read-only by the scoring core.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub summary: Option<String>,
    pub total_experience_years: Option<f64>,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: Option<String>,
    pub role: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub duration: Option<String>,
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
    pub job_title: String,
    pub company: String,
    pub location: Option<String>,
    /// Free text, e.g. "3-5 years" or "Entry level".
    pub experience_required: String,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub job_type: String,
    pub salary_range: Option<String>,
}

impl Resume {
    /// Roles held across work history, in resume order. Entries without a
    /// role are skipped.
    pub fn roles(&self) -> Vec<String> {
        self.experience
            .iter()
            .filter_map(|exp| exp.role.clone())
            .collect()
    }
}
