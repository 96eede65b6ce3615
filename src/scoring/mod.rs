//! Weighted resume-to-job scoring.
//!
//! Five factors, each scored in [0, 1] with its own evidence struct, are
//! combined under a validated weight set into a single total.

pub mod depth;
pub mod experience;
pub mod scorer;
pub mod skills;
pub mod title;
pub mod weights;

pub use depth::{score_skill_depth, DepthDetails};
pub use experience::{parse_experience_requirement, score_experience, ExperienceDetails};
pub use scorer::{Factor, ScoreBreakdown, WeightedScorer};
pub use skills::{score_skill_match, SkillMatchDetails};
pub use title::{score_title_similarity, TitleDetails};
pub use weights::{Weights, DEFAULT_WEIGHTS};
