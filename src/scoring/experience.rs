use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExperienceDetails {
    pub resume_years: Option<f64>,
    pub required_min: Option<f64>,
    pub required_max: Option<f64>,
    pub status: String,
}

static RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*-\s*(\d+)").unwrap());
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Parses a free-text experience requirement into (min, max) years.
///
/// Understood forms, checked in order:
/// - "entry level", "fresher", "0 years"   -> (0, 2)
/// - "5+ years", "5 or more years"         -> (5, open-ended)
/// - "3-5 years"                           -> (3, 5)
/// - "4 years"                             -> (4, 6)
/// - anything else                         -> unparseable
pub fn parse_experience_requirement(requirement: &str) -> (Option<f64>, Option<f64>) {
    let text = requirement.to_lowercase();

    if text.contains("entry") || text.contains("fresher") || text.contains("0 year") {
        return (Some(0.0), Some(2.0));
    }

    if text.contains('+') || text.contains("more") {
        if let Some(m) = NUMBER_RE.find(&text) {
            let n: f64 = m.as_str().parse().unwrap_or(0.0);
            return (Some(n), None);
        }
    }

    if let Some(caps) = RANGE_RE.captures(&text) {
        let lo: f64 = caps[1].parse().unwrap_or(0.0);
        let hi: f64 = caps[2].parse().unwrap_or(lo);
        return (Some(lo), Some(hi));
    }

    if let Some(m) = NUMBER_RE.find(&text) {
        let n: f64 = m.as_str().parse().unwrap_or(0.0);
        return (Some(n), Some(n + 2.0));
    }

    (None, None)
}

const UNDER_QUALIFIED_PENALTY: f64 = 0.15;
const UNDER_QUALIFIED_FLOOR: f64 = 0.3;
const OVER_QUALIFIED_PENALTY: f64 = 0.05;
const OVER_QUALIFIED_FLOOR: f64 = 0.8;

/// Scores candidate experience against a textual requirement.
///
/// Under-qualification is penalized much harder than over-qualification;
/// an unparseable requirement or unknown candidate tenure degrades to a
/// neutral score instead of failing.
pub fn score_experience(resume_years: Option<f64>, requirement: &str) -> (f64, ExperienceDetails) {
    let (required_min, required_max) = parse_experience_requirement(requirement);

    let mut details = ExperienceDetails {
        resume_years,
        required_min,
        required_max,
        status: String::new(),
    };

    let Some(min) = required_min else {
        details.status = "Acceptable".to_string();
        let score = if resume_years.is_some() { 1.0 } else { 0.5 };
        return (score, details);
    };

    let Some(years) = resume_years else {
        details.status = "Unknown".to_string();
        return (0.5, details);
    };

    if years < min {
        let gap = min - years;
        details.status = format!("Under-qualified by {gap:.1} years");
        let score = (1.0 - gap * UNDER_QUALIFIED_PENALTY).max(UNDER_QUALIFIED_FLOOR);
        return (score, details);
    }

    if let Some(max) = required_max {
        if years > max {
            let excess = years - max;
            details.status = format!("Over-qualified by {excess:.1} years");
            let score = (1.0 - excess * OVER_QUALIFIED_PENALTY).max(OVER_QUALIFIED_FLOOR);
            return (score, details);
        }
    }

    details.status = "Perfect match".to_string();
    (1.0, details)
}
