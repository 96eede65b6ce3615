use serde::Serialize;

use crate::embedding::EmbeddingProvider;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TitleDetails {
    /// The resume role closest to the job title, when any role exists.
    pub best_match: Option<String>,
}

/// Best embedding similarity between the job title and any past role on
/// the resume. A resume with no roles at all gets a neutral 0.5.
pub fn score_title_similarity(
    provider: &dyn EmbeddingProvider,
    resume_roles: &[String],
    job_title: &str,
) -> (f64, TitleDetails) {
    if resume_roles.is_empty() {
        return (0.5, TitleDetails::default());
    }

    let title_emb = provider.embed_text(&job_title.to_lowercase());

    let mut best_score = 0.0f64;
    let mut best_match = None;
    for role in resume_roles {
        let role_emb = provider.embed_text(&role.to_lowercase());
        let sim = provider.similarity(&title_emb, &role_emb).max(0.0);
        if sim > best_score {
            best_score = sim;
            best_match = Some(role.clone());
        }
    }

    (best_score, TitleDetails { best_match })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::HashEmbedder;

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_roles_is_neutral() {
        let embedder = HashEmbedder::default();
        let (score, details) = score_title_similarity(&embedder, &[], "Data Scientist");
        assert_eq!(score, 0.5);
        assert_eq!(details.best_match, None);
    }

    #[test]
    fn exact_role_scores_highest() {
        let embedder = HashEmbedder::default();
        let (score, details) = score_title_similarity(
            &embedder,
            &roles(&["Accountant", "Data Scientist"]),
            "Data Scientist",
        );
        assert!((score - 1.0).abs() < 1e-6);
        assert_eq!(details.best_match.as_deref(), Some("Data Scientist"));
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let embedder = HashEmbedder::default();
        let (score, _) = score_title_similarity(&embedder, &roles(&["DATA SCIENTIST"]), "data scientist");
        assert!((score - 1.0).abs() < 1e-6);
    }
}
