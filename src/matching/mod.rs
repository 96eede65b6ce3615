//! Ranking resumes against jobs (and jobs against resumes) over in-memory
//! embedding indexes, plus the single-pair evaluation pipeline.

pub mod index;
pub mod matcher;
pub mod pipeline;

pub use index::SimilarityIndex;
pub use matcher::{MatchResult, ResumeJobMatcher, SkillOverlap};
pub use pipeline::{MatchPipeline, MatchReport};
