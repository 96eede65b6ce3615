//! Canonical skill identity: alias normalization, text extraction, and the
//! one-level capability hierarchy.

mod tables;

use std::collections::{BTreeSet, HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use strsim::damerau_levenshtein;
use unicode_normalization::UnicodeNormalization;

use tables::{SKILL_ALIASES, SKILL_HIERARCHY, SKILL_PATTERNS};

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Skill dictionaries as constructed, injectable state. Build once (cheap)
/// and share behind an `Arc` across scorer and matcher instances.
pub struct SkillOntology {
    aliases: HashMap<String, &'static str>,
    compact_aliases: HashMap<String, &'static str>,
    patterns: Vec<(Regex, &'static str)>,
    hierarchy: HashMap<&'static str, &'static [&'static str]>,
}

impl Default for SkillOntology {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillOntology {
    pub fn new() -> Self {
        let mut aliases: HashMap<String, &'static str> = HashMap::new();
        let mut compact_aliases: HashMap<String, &'static str> = HashMap::new();

        for (canonical, names) in SKILL_ALIASES {
            for alias in *names {
                aliases.entry((*alias).to_string()).or_insert(*canonical);
                compact_aliases
                    .entry(compact_key(alias))
                    .or_insert(*canonical);
            }
            // Every canonical form must round-trip to itself.
            aliases
                .entry(canonical.to_lowercase())
                .or_insert(*canonical);
            compact_aliases
                .entry(compact_key(&canonical.to_lowercase()))
                .or_insert(*canonical);
        }

        let patterns = SKILL_PATTERNS
            .iter()
            .map(|(pattern, canonical)| (Regex::new(pattern).unwrap(), *canonical))
            .collect();

        let hierarchy = SKILL_HIERARCHY.iter().copied().collect();

        Self {
            aliases,
            compact_aliases,
            patterns,
            hierarchy,
        }
    }

    /// Normalize a free-text skill into its canonical form.
    ///
    /// Lookup path: trimmed NFKC-lowered key against the alias table, then a
    /// separator-stripped compact key, then a guarded Damerau-Levenshtein
    /// pass over the compact aliases for close typos. On a full miss the
    /// trimmed input is title-cased. Idempotent: normalizing a canonical
    /// form returns it unchanged. Empty input yields an empty string.
    pub fn normalize(&self, skill: &str) -> String {
        let trimmed = skill.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let key = lookup_key(trimmed);
        if let Some(canonical) = self.aliases.get(&key) {
            return (*canonical).to_string();
        }

        let compact = compact_key(&key);
        if let Some(canonical) = self.compact_aliases.get(&compact) {
            return (*canonical).to_string();
        }

        if let Some(canonical) = self.fuzzy_match(&compact) {
            return canonical.to_string();
        }

        title_case(trimmed)
    }

    /// Normalize every entry, drop empties, deduplicate case-insensitively
    /// (first occurrence wins) and return the result sorted ascending.
    /// The sorted order is an API contract.
    pub fn normalize_all(&self, skills: &[String]) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut out: Vec<String> = Vec::new();

        for skill in skills {
            let norm = self.normalize(skill);
            if norm.is_empty() {
                continue;
            }
            if seen.insert(norm.to_lowercase()) {
                out.push(norm);
            }
        }

        out.sort();
        out
    }

    /// Detect skills inside raw text via the pattern rules plus single-word
    /// and adjacent-word-pair alias lookups. Returns the sorted,
    /// deduplicated union.
    pub fn extract_from_text(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut found: BTreeSet<&'static str> = BTreeSet::new();

        for (regex, canonical) in &self.patterns {
            if regex.is_match(&lowered) {
                found.insert(canonical);
            }
        }

        let words: Vec<&str> = WORD_RE.find_iter(&lowered).map(|m| m.as_str()).collect();

        for word in &words {
            if let Some(canonical) = self.aliases.get(*word) {
                found.insert(canonical);
            }
        }

        for pair in words.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            if let Some(canonical) = self.aliases.get(&bigram) {
                found.insert(canonical);
            }
        }

        found.into_iter().map(str::to_string).collect()
    }

    /// The skill itself plus its direct hierarchy children. One level only;
    /// grandchildren are not expanded.
    pub fn equivalent_skills(&self, skill: &str) -> BTreeSet<String> {
        let mut related: BTreeSet<String> = BTreeSet::new();
        related.insert(skill.to_string());
        if let Some(children) = self.hierarchy.get(skill) {
            related.extend(children.iter().map(|child| (*child).to_string()));
        }
        related
    }

    /// Parents that list `skill` as a direct child.
    pub fn parents_of(&self, skill: &str) -> Vec<&'static str> {
        self.hierarchy
            .iter()
            .filter(|(_, children)| children.iter().any(|child| *child == skill))
            .map(|(parent, _)| *parent)
            .collect()
    }

    fn fuzzy_match(&self, compact: &str) -> Option<&'static str> {
        if compact.len() < 5 {
            return None;
        }

        let mut best: Option<(&'static str, usize)> = None;
        for (alias, canonical) in &self.compact_aliases {
            // Short aliases and short canonical targets are matched via exact
            // lookup only, to avoid false positives on brief inputs.
            if alias.len() < 5 || canonical.len() < 5 {
                continue;
            }

            let distance = damerau_levenshtein(compact, alias);
            if distance == 0 {
                return Some(canonical);
            }

            let len = compact.len().max(alias.len());
            let acceptable = distance == 1 || (len >= 8 && distance == 2);
            if !acceptable {
                continue;
            }

            match best {
                None => best = Some((canonical, distance)),
                Some((_, best_dist)) if distance < best_dist => {
                    best = Some((canonical, distance))
                }
                _ => {}
            }
        }

        best.map(|(canonical, _)| canonical)
    }
}

/// NFKC fold, lowercase, collapse internal whitespace.
fn lookup_key(input: &str) -> String {
    let folded: String = input.nfkc().collect::<String>().to_lowercase();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn compact_key(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/' | ','))
        .collect()
}

/// Capitalize the letter following any non-alphabetic character, lowercase
/// the rest ("machine learning" -> "Machine Learning").
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_alpha = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ontology() -> SkillOntology {
        SkillOntology::new()
    }

    #[test]
    fn aliases_map_to_canonical_forms() {
        let ont = ontology();
        assert_eq!(ont.normalize("ml"), "Machine Learning");
        assert_eq!(ont.normalize("K8s"), "Kubernetes");
        assert_eq!(ont.normalize("react.js"), "React");
        assert_eq!(ont.normalize("  python  "), "Python");
        assert_eq!(ont.normalize("c#"), "C#");
    }

    #[test]
    fn normalize_is_idempotent() {
        let ont = ontology();
        for input in [
            "ml",
            "Machine Learning",
            "react.js",
            "PyTorch",
            "some unknown framework",
            "scikit-learn",
        ] {
            let once = ont.normalize(input);
            assert_eq!(ont.normalize(&once), once, "input: {input}");
        }
    }

    #[test]
    fn unknown_skills_are_title_cased() {
        let ont = ontology();
        assert_eq!(ont.normalize("quantum annealing"), "Quantum Annealing");
        assert_eq!(ont.normalize(""), "");
        assert_eq!(ont.normalize("   "), "");
    }

    #[test]
    fn close_typos_of_known_aliases_still_canonicalize() {
        let ont = ontology();
        assert_eq!(ont.normalize("pytroch"), "PyTorch");
        assert_eq!(ont.normalize("kuberntes"), "Kubernetes");
        // Short tokens are never fuzzy matched.
        assert_eq!(ont.normalize("javaa"), "Javaa");
    }

    #[test]
    fn normalize_all_sorts_and_deduplicates() {
        let ont = ontology();
        let skills = vec![
            "k8s".to_string(),
            "docker".to_string(),
            "Docker".to_string(),
            "".to_string(),
        ];
        assert_eq!(ont.normalize_all(&skills), vec!["Docker", "Kubernetes"]);
    }

    #[test]
    fn extraction_unions_patterns_words_and_bigrams() {
        let ont = ontology();
        let text = "Built ML pipelines on k8s; reporting in Power BI with scikit-learn models.";
        let skills = ont.extract_from_text(text);

        assert!(skills.contains(&"Machine Learning".to_string()));
        assert!(skills.contains(&"Kubernetes".to_string()));
        assert!(skills.contains(&"Power BI".to_string()));
        assert!(skills.contains(&"scikit-learn".to_string()));
        let mut sorted = skills.clone();
        sorted.sort();
        assert_eq!(skills, sorted);
    }

    #[test]
    fn extraction_is_deterministic() {
        let ont = ontology();
        let text = "python, tensorflow, aws and docker. Also Python and AWS again.";
        assert_eq!(ont.extract_from_text(text), ont.extract_from_text(text));
    }

    #[test]
    fn equivalent_skills_expand_one_level_only() {
        let ont = ontology();
        let ml = ont.equivalent_skills("Machine Learning");
        assert!(ml.contains("Machine Learning"));
        assert!(ml.contains("PyTorch"));
        // "Neural Networks" is a child of Deep Learning, not of ML directly.
        assert!(!ml.contains("Neural Networks"));

        let pytorch = ont.equivalent_skills("PyTorch");
        assert_eq!(pytorch.len(), 1);
        assert!(pytorch.contains("PyTorch"));
    }

    #[test]
    fn parents_of_lists_direct_parents() {
        let ont = ontology();
        let parents = ont.parents_of("PyTorch");
        assert!(parents.contains(&"Machine Learning"));
        assert!(parents.contains(&"Deep Learning"));
        assert!(parents.contains(&"Python"));
        assert!(ont.parents_of("Machine Learning").contains(&"Data Science"));
    }

    #[test]
    fn hierarchy_entries_survive_normalization() {
        let ont = ontology();
        for (parent, children) in super::tables::SKILL_HIERARCHY {
            assert_eq!(ont.normalize(parent), *parent);
            for child in *children {
                assert_eq!(ont.normalize(child), *child);
            }
        }
    }
}
