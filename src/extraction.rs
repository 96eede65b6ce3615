//! Document parsing seam.
//!
//! Real deployments plug in PDF/DOCX parsers behind [`DocumentParser`];
//! [`PlainTextParser`] covers .txt input and tests.

use std::sync::Arc;

use crate::error::ParseError;
use crate::ontology::SkillOntology;
use crate::{JobDescription, Resume};

pub trait DocumentParser: Send + Sync {
    fn parse_resume(&self, bytes: &[u8], filename: &str) -> Result<Resume, ParseError>;

    fn parse_job_text(&self, text: &str) -> Result<JobDescription, ParseError>;
}

/// Naive parser for plain-text documents. The first non-empty line is taken
/// as the name (resume) or title (job); skills are recognized anywhere in
/// the body via the ontology's extraction pass.
pub struct PlainTextParser {
    ontology: Arc<SkillOntology>,
}

impl PlainTextParser {
    pub fn new(ontology: Arc<SkillOntology>) -> Self {
        Self { ontology }
    }
}

impl DocumentParser for PlainTextParser {
    fn parse_resume(&self, bytes: &[u8], filename: &str) -> Result<Resume, ParseError> {
        if !filename.to_lowercase().ends_with(".txt") {
            return Err(ParseError::UnsupportedFormat(filename.to_string()));
        }
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ParseError::Extraction(format!("invalid utf-8 in {filename}: {e}")))?;

        let name = text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string);

        Ok(Resume {
            name,
            technical_skills: self.ontology.extract_from_text(text),
            ..Default::default()
        })
    }

    fn parse_job_text(&self, text: &str) -> Result<JobDescription, ParseError> {
        let job_title = text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or(ParseError::MissingField("job_title"))?
            .to_string();

        Ok(JobDescription {
            job_title,
            technical_skills: self.ontology.extract_from_text(text),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> PlainTextParser {
        PlainTextParser::new(Arc::new(SkillOntology::new()))
    }

    #[test]
    fn parses_plain_text_resume() {
        let text = "Jane Roe\n\nExperienced analyst with python, pandas and power bi.";
        let resume = parser().parse_resume(text.as_bytes(), "jane.txt").unwrap();
        assert_eq!(resume.name.as_deref(), Some("Jane Roe"));
        assert!(resume.technical_skills.contains(&"Python".to_string()));
        assert!(resume.technical_skills.contains(&"Pandas".to_string()));
    }

    #[test]
    fn rejects_unsupported_format() {
        let err = parser().parse_resume(b"%PDF-1.7", "resume.pdf").unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFormat(_)));
    }

    #[test]
    fn parses_job_text() {
        let job = parser()
            .parse_job_text("Machine Learning Engineer\nNeeds tensorflow and docker.")
            .unwrap();
        assert_eq!(job.job_title, "Machine Learning Engineer");
        assert!(job.technical_skills.contains(&"TensorFlow".to_string()));
        assert!(job.technical_skills.contains(&"Docker".to_string()));
    }

    #[test]
    fn blank_job_text_is_missing_title() {
        let err = parser().parse_job_text("  \n\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingField("job_title")));
    }
}
