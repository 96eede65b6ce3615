use thiserror::Error;

/// Failures surfaced by the scoring and matching core.
///
/// Edge-case inputs (empty skill lists, missing experience years, unknown
/// job titles) never produce an error; each has a documented neutral score.
/// These variants cover structural misuse only.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("job index not built; call build_job_index first")]
    JobIndexNotBuilt,
    #[error("resume index not built; call build_resume_index first")]
    ResumeIndexNotBuilt,
    #[error("scoring weights must sum to 1.0, got {sum:.4}")]
    InvalidWeights { sum: f64 },
    #[error("scoring weight for {factor} must be non-negative, got {value}")]
    NegativeWeight { factor: &'static str, value: f64 },
}

/// Failures from the external document parser contract. Propagated to the
/// caller untouched; the core does not attempt partial recovery.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("document extraction failed: {0}")]
    Extraction(String),
    #[error("parsed payload missing required field: {0}")]
    MissingField(&'static str),
}

/// Failure from an injected language model. The explanation layer catches
/// this and falls back to a deterministic template; it never escapes the
/// explainer.
#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("language model call failed: {0}")]
    Llm(String),
}
