use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::{JobDescription, Resume};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DepthDetails {
    /// Evidence points per required skill, keyed by lowercased skill name.
    pub depth_map: BTreeMap<String, u32>,
}

const LIST_POINTS: u32 = 1;
const EXPERIENCE_POINTS: u32 = 2;
const PROJECT_POINTS: u32 = 1;
const TARGET_POINTS_PER_SKILL: f64 = 4.0;

/// Measures how deeply each required skill is evidenced on the resume:
/// listing it is worth one point, each job that used it two, each project
/// one. Full marks at four points per required skill.
pub fn score_skill_depth(resume: &Resume, job: &JobDescription) -> (f64, DepthDetails) {
    if job.technical_skills.is_empty() {
        return (0.5, DepthDetails::default());
    }

    let mut depth: HashMap<String, u32> = HashMap::new();
    for skill in &resume.technical_skills {
        let key = skill.to_lowercase();
        let mut points = LIST_POINTS;
        for exp in &resume.experience {
            if exp.technologies.iter().any(|t| t.to_lowercase() == key) {
                points += EXPERIENCE_POINTS;
            }
        }
        for project in &resume.projects {
            if project.technologies.iter().any(|t| t.to_lowercase() == key) {
                points += PROJECT_POINTS;
            }
        }
        depth.insert(key, points);
    }

    let mut depth_map = BTreeMap::new();
    let mut total = 0u32;
    for skill in &job.technical_skills {
        let key = skill.to_lowercase();
        let points = depth.get(&key).copied().unwrap_or(0);
        total += points;
        depth_map.insert(key, points);
    }

    let score = (total as f64 / (TARGET_POINTS_PER_SKILL * job.technical_skills.len() as f64))
        .min(1.0);

    (score, DepthDetails { depth_map })
}
