// AI ranking pipeline: per-talent scoring, skill recommendations,
// batch ranking across the marketplace and the sorted marketplace view.
// All generation calls go through llm_client.

pub mod batch;
pub mod handlers;
pub mod marketplace;
pub mod prompts;
pub mod recommender;
pub mod scorer;

pub use recommender::{SkillRecommendation, SkillRecommender};
pub use scorer::{TalentScore, TalentScorer};
