//! Skill recommendations: suggests new skills for a talent via the
//! generation service. Any failure yields an empty list.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm_client::prompts::json_system;
use crate::llm_client::{complete_within, CompletionService, LlmError};
use crate::models::User;
use crate::ranking::prompts::{build_recommend_prompt, RECOMMEND_SYSTEM};

/// Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecommendation {
    pub skill: String,
    pub reason: String,
    /// 0.0 – 1.0
    pub confidence: f64,
}

#[derive(Debug, Deserialize)]
struct RawRecommendations {
    recommendations: Vec<SkillRecommendation>,
}

#[derive(Clone)]
pub struct SkillRecommender {
    llm: Arc<dyn CompletionService>,
    deadline: Duration,
}

impl SkillRecommender {
    pub fn new(llm: Arc<dyn CompletionService>, deadline: Duration) -> Self {
        Self { llm, deadline }
    }

    pub async fn recommend_skills(&self, talent: &User) -> Vec<SkillRecommendation> {
        match self.try_recommend(talent).await {
            Ok(recommendations) => {
                info!(
                    "Generated {} skill recommendations for talent {}",
                    recommendations.len(),
                    talent.id
                );
                recommendations
            }
            Err(e) => {
                warn!("Error recommending skills for talent {}: {e}", talent.id);
                Vec::new()
            }
        }
    }

    async fn try_recommend(&self, talent: &User) -> Result<Vec<SkillRecommendation>, LlmError> {
        let prompt = build_recommend_prompt(talent);
        let system = json_system(RECOMMEND_SYSTEM);
        let value = complete_within(self.llm.as_ref(), &prompt, &system, self.deadline).await?;
        let raw: RawRecommendations = serde_json::from_value(value)?;

        Ok(raw
            .recommendations
            .into_iter()
            .map(|rec| SkillRecommendation {
                confidence: rec.confidence.clamp(0.0, 1.0),
                ..rec
            })
            .collect())
    }
}
