use std::sync::Arc;

use crate::ranking::{SkillRecommender, TalentScorer};
use crate::storage::Storage;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storage>,
    pub scorer: TalentScorer,
    pub recommender: SkillRecommender,
    /// Max in-flight scoring calls for batch ranking. 1 = sequential.
    pub ranking_concurrency: usize,
}
