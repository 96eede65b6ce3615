//! Learning roadmaps for skill gaps.
//!
//! Missing skills are categorized by how central they are to the target
//! role, scheduled into sequential phases, and paired with study resources
//! by proficiency tier.

mod tables;

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;
use strum::Display;

use tables::{ResourceSet, DEFAULT_DURATION_WEEKS, ROLE_CORE_SKILLS, SKILL_DURATIONS, SKILL_RESOURCES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
}

/// One skill on the plan, with its slot in the overall schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillPlan {
    pub name: String,
    pub weeks: u32,
    pub start_week: u32,
    pub end_week: u32,
    pub resources: BTreeMap<Proficiency, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phase {
    pub name: String,
    pub description: String,
    pub start_week: u32,
    pub end_week: u32,
    pub skills: Vec<SkillPlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoadmapSummary {
    pub total_skills: usize,
    pub critical: usize,
    pub important: usize,
    pub nice_to_have: usize,
    pub estimated_weeks: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Roadmap {
    pub summary: RoadmapSummary,
    pub phases: Vec<Phase>,
}

const CRITICAL_PHASE_CAP_WEEKS: u32 = 8;
const IMPORTANT_PHASE_CAP_WEEKS: u32 = 8;
const NICE_TO_HAVE_PHASE_CAP_WEEKS: u32 = 12;

pub struct RoadmapGenerator;

impl Default for RoadmapGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RoadmapGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Builds a phased learning plan from the missing skills of a match.
    ///
    /// Phases run back-to-back starting at week 1 and each phase has a
    /// week cap; skills that do not fit their phase are cut, keeping the
    /// plan bounded. `current_skills` is informational only and never
    /// removes a missing skill from its bucket.
    pub fn generate(
        &self,
        missing_skills: &[String],
        job_title: &str,
        current_skills: Option<&[String]>,
    ) -> Roadmap {
        let _ = current_skills;

        let (critical, important, nice_to_have) = categorize(missing_skills, job_title);

        let mut phases = Vec::new();
        let mut next_week = 1u32;

        for (name, description, cap, skills) in [
            (
                "Phase 1: Critical Skills",
                "Must-have skills for the role",
                CRITICAL_PHASE_CAP_WEEKS,
                &critical,
            ),
            (
                "Phase 2: Important Skills",
                "Highly valuable skills",
                IMPORTANT_PHASE_CAP_WEEKS,
                &important,
            ),
            (
                "Phase 3: Nice-to-Have Skills",
                "Additional skills for competitive edge",
                NICE_TO_HAVE_PHASE_CAP_WEEKS,
                &nice_to_have,
            ),
        ] {
            if let Some(phase) = build_phase(name, description, cap, skills, next_week) {
                next_week = phase.end_week + 1;
                phases.push(phase);
            }
        }

        let estimated_weeks = phases.last().map(|p| p.end_week).unwrap_or(0);

        Roadmap {
            summary: RoadmapSummary {
                total_skills: critical.len() + important.len() + nice_to_have.len(),
                critical: critical.len(),
                important: important.len(),
                nice_to_have: nice_to_have.len(),
                estimated_weeks,
            },
            phases,
        }
    }

    /// Plain-text rendering of the roadmap.
    pub fn format_roadmap(&self, roadmap: &Roadmap) -> String {
        let mut out = String::new();
        let s = &roadmap.summary;
        let _ = writeln!(
            out,
            "Learning roadmap: {} skills over ~{} weeks",
            s.total_skills, s.estimated_weeks
        );
        let _ = writeln!(
            out,
            "  critical: {}, important: {}, nice-to-have: {}",
            s.critical, s.important, s.nice_to_have
        );
        for phase in &roadmap.phases {
            let _ = writeln!(
                out,
                "\n{} (weeks {}-{}): {}",
                phase.name, phase.start_week, phase.end_week, phase.description
            );
            for skill in &phase.skills {
                let _ = writeln!(
                    out,
                    "  - {} (weeks {}-{})",
                    skill.name, skill.start_week, skill.end_week
                );
                for (tier, resources) in &skill.resources {
                    for resource in resources {
                        let _ = writeln!(out, "      [{tier}] {resource}");
                    }
                }
            }
        }
        out
    }
}

/// Splits missing skills into criticality buckets using the closest role
/// profile. Without a recognized role, the first half is treated as
/// critical and the rest as important.
fn categorize(missing: &[String], job_title: &str) -> (Vec<String>, Vec<String>, Vec<String>) {
    let title = job_title.to_lowercase();
    let profile = ROLE_CORE_SKILLS
        .iter()
        .find(|(role, _)| title.contains(role))
        .map(|(_, skills)| *skills);

    let Some(core) = profile else {
        let half = missing.len() / 2;
        return (
            missing[..half].to_vec(),
            missing[half..].to_vec(),
            Vec::new(),
        );
    };

    let mut critical = Vec::new();
    let mut important = Vec::new();
    let mut nice_to_have = Vec::new();
    for skill in missing {
        let lower = skill.to_lowercase();
        if core.contains(&lower.as_str()) {
            critical.push(skill.clone());
        } else if core.iter().any(|c| lower.contains(c)) {
            important.push(skill.clone());
        } else {
            nice_to_have.push(skill.clone());
        }
    }
    (critical, important, nice_to_have)
}

fn estimate_weeks(skill: &str) -> u32 {
    let lower = skill.to_lowercase();
    SKILL_DURATIONS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, weeks)| *weeks)
        .unwrap_or(DEFAULT_DURATION_WEEKS)
}

/// Packs skills into a contiguous phase, stopping at the first skill that
/// would exceed the week cap. An empty phase always admits its first skill,
/// so a skill longer than the whole cap still gets scheduled.
fn build_phase(
    name: &str,
    description: &str,
    cap_weeks: u32,
    skills: &[String],
    start_week: u32,
) -> Option<Phase> {
    if skills.is_empty() {
        return None;
    }

    let mut plans = Vec::new();
    let mut weeks_used = 0u32;

    for skill in skills {
        let weeks = estimate_weeks(skill);
        if weeks_used + weeks > cap_weeks && weeks_used > 0 {
            break;
        }
        let start = start_week + weeks_used;
        plans.push(SkillPlan {
            name: skill.clone(),
            weeks,
            start_week: start,
            end_week: start + weeks - 1,
            resources: resources_for(skill),
        });
        weeks_used += weeks;
    }

    Some(Phase {
        name: name.to_string(),
        description: description.to_string(),
        start_week,
        end_week: start_week + weeks_used - 1,
        skills: plans,
    })
}

fn resources_for(skill: &str) -> BTreeMap<Proficiency, Vec<String>> {
    let lower = skill.to_lowercase();
    let curated = SKILL_RESOURCES
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, set)| set);

    let mut map = BTreeMap::new();
    match curated {
        Some(ResourceSet {
            beginner,
            intermediate,
            advanced,
        }) => {
            map.insert(
                Proficiency::Beginner,
                beginner.iter().map(|s| s.to_string()).collect(),
            );
            map.insert(
                Proficiency::Intermediate,
                intermediate.iter().map(|s| s.to_string()).collect(),
            );
            map.insert(
                Proficiency::Advanced,
                advanced.iter().map(|s| s.to_string()).collect(),
            );
        }
        None => {
            map.insert(
                Proficiency::Beginner,
                vec![
                    format!("Search: \"{skill} tutorial for beginners\""),
                    format!("https://www.youtube.com/results?search_query={skill}+tutorial"),
                ],
            );
            map.insert(
                Proficiency::Intermediate,
                vec![format!("Search: \"{skill} intermediate course\"")],
            );
            map.insert(
                Proficiency::Advanced,
                vec![format!("Search: \"{skill} advanced projects\"")],
            );
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn skills_within_caps_each_appear_once() {
        let generator = RoadmapGenerator::new();
        let missing = skills(&["Python", "AWS", "Tableau"]);
        let roadmap = generator.generate(&missing, "Data Scientist", None);

        assert_eq!(roadmap.summary.total_skills, 3);
        let mut planned: Vec<String> = roadmap
            .phases
            .iter()
            .flat_map(|p| p.skills.iter().map(|s| s.name.clone()))
            .collect();
        planned.sort();
        let mut expected = missing.clone();
        expected.sort();
        assert_eq!(planned, expected);
    }

    #[test]
    fn phase_cap_cuts_overflow_skills() {
        let generator = RoadmapGenerator::new();
        let roadmap = generator.generate(
            &skills(&["Python", "SQL", "Machine Learning", "Statistics"]),
            "Data Scientist",
            None,
        );

        // Python (4w) + SQL (3w) fit the 8-week cap; Machine Learning (6w)
        // would push past it, so it and everything after is cut.
        let phase1 = &roadmap.phases[0];
        let scheduled: Vec<&str> = phase1.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(scheduled, vec!["Python", "SQL"]);
        assert_eq!(phase1.end_week, 7);
        assert_eq!(roadmap.summary.estimated_weeks, 7);
        // The bucket counts still describe the full gap.
        assert_eq!(roadmap.summary.critical, 4);
    }

    #[test]
    fn phases_are_contiguous_from_week_one() {
        let generator = RoadmapGenerator::new();
        let roadmap = generator.generate(
            &skills(&["Python", "SQL", "Tableau", "Docker"]),
            "Data Analyst",
            None,
        );

        assert!(!roadmap.phases.is_empty());
        assert_eq!(roadmap.phases[0].start_week, 1);
        for pair in roadmap.phases.windows(2) {
            assert_eq!(pair[1].start_week, pair[0].end_week + 1);
        }
        for phase in &roadmap.phases {
            let mut cursor = phase.start_week;
            for skill in &phase.skills {
                assert_eq!(skill.start_week, cursor);
                assert_eq!(skill.end_week, cursor + skill.weeks - 1);
                cursor = skill.end_week + 1;
            }
        }
        assert_eq!(
            roadmap.summary.estimated_weeks,
            roadmap.phases.last().unwrap().end_week
        );
    }

    #[test]
    fn role_profile_drives_criticality() {
        let generator = RoadmapGenerator::new();
        let roadmap = generator.generate(
            &skills(&["Machine Learning", "Kubernetes"]),
            "Senior Data Scientist",
            None,
        );

        let phase1 = &roadmap.phases[0];
        assert!(phase1.name.starts_with("Phase 1"));
        assert_eq!(phase1.skills[0].name, "Machine Learning");
        assert_eq!(roadmap.summary.critical, 1);
        assert_eq!(roadmap.summary.nice_to_have, 1);
    }

    #[test]
    fn unknown_role_splits_first_half_critical() {
        let generator = RoadmapGenerator::new();
        let roadmap = generator.generate(
            &skills(&["Python", "SQL", "Docker"]),
            "Chief Vibes Officer",
            None,
        );
        // Floor split: 3 skills -> 1 critical, 2 important.
        assert_eq!(roadmap.summary.critical, 1);
        assert_eq!(roadmap.summary.important, 2);
        assert_eq!(roadmap.summary.nice_to_have, 0);
        assert_eq!(roadmap.phases[0].skills[0].name, "Python");
    }

    #[test]
    fn important_needs_the_whole_core_phrase() {
        let generator = RoadmapGenerator::new();

        // "deep learning" does not contain "machine learning", so it is
        // only nice-to-have for a data scientist.
        let roadmap = generator.generate(&skills(&["Deep Learning"]), "Data Scientist", None);
        assert_eq!(roadmap.summary.important, 0);
        assert_eq!(roadmap.summary.nice_to_have, 1);

        // "advanced sql" contains the core phrase "sql".
        let roadmap = generator.generate(&skills(&["Advanced SQL"]), "Data Scientist", None);
        assert_eq!(roadmap.summary.important, 1);
        assert_eq!(roadmap.summary.nice_to_have, 0);
    }

    #[test]
    fn long_skill_alone_fills_a_phase() {
        let generator = RoadmapGenerator::new();
        let roadmap = generator.generate(&skills(&["Deep Learning"]), "ML Engineer", None);
        assert_eq!(roadmap.summary.total_skills, 1);
        let plan = &roadmap.phases[0].skills[0];
        assert_eq!(plan.weeks, 8);
        assert_eq!(plan.start_week, 1);
        assert_eq!(plan.end_week, 8);
    }

    #[test]
    fn no_missing_skills_means_empty_roadmap() {
        let generator = RoadmapGenerator::new();
        let roadmap = generator.generate(&[], "Data Scientist", None);
        assert!(roadmap.phases.is_empty());
        assert_eq!(roadmap.summary.estimated_weeks, 0);
    }

    #[test]
    fn curated_resources_are_tiered() {
        let generator = RoadmapGenerator::new();
        let roadmap = generator.generate(&skills(&["Python"]), "Data Scientist", None);
        let plan = &roadmap.phases[0].skills[0];
        assert!(plan.resources[&Proficiency::Beginner]
            .iter()
            .any(|r| r.contains("Python for Everybody")));
        assert!(plan.resources.contains_key(&Proficiency::Advanced));
    }

    #[test]
    fn unknown_skill_gets_search_placeholders() {
        let generator = RoadmapGenerator::new();
        let roadmap = generator.generate(&skills(&["Quantum Annealing"]), "Data Scientist", None);
        let plan = &roadmap.phases[0].skills[0];
        assert!(plan.resources[&Proficiency::Beginner]
            .iter()
            .any(|r| r.contains("tutorial for beginners")));
    }

    #[test]
    fn format_includes_phases_and_weeks() {
        let generator = RoadmapGenerator::new();
        let roadmap = generator.generate(&skills(&["Python", "AWS"]), "Data Scientist", None);
        let text = generator.format_roadmap(&roadmap);
        assert!(text.contains("Learning roadmap:"));
        assert!(text.contains("Phase 1: Critical Skills"));
        assert!(text.contains("weeks 1-"));
    }
}
