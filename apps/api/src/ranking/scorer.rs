//! Talent scoring: asks the generation service for a bounded
//! score/confidence/reasoning triple for one profile.
//!
//! Never fails: transport errors, timeouts, malformed JSON and schema
//! violations all collapse into `TalentScore::fallback()`.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::llm_client::prompts::json_system;
use crate::llm_client::{complete_within, CompletionService, LlmError};
use crate::models::{TalentToken, User};
use crate::ranking::prompts::{build_score_prompt, SCORE_SYSTEM};

pub const FALLBACK_REASONING: &str = "Failed to analyze talent profile";

/// Derived, never persisted or cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalentScore {
    /// 0 – 100
    pub score: u8,
    /// 0.0 – 1.0
    pub confidence: f64,
    pub reasoning: String,
}

impl TalentScore {
    pub fn fallback() -> Self {
        Self {
            score: 0,
            confidence: 0.0,
            reasoning: FALLBACK_REASONING.to_string(),
        }
    }
}

/// Expected response shape. Anything else is a schema violation.
#[derive(Debug, Deserialize)]
struct RawScore {
    score: f64,
    confidence: f64,
    reasoning: String,
}

impl From<RawScore> for TalentScore {
    fn from(raw: RawScore) -> Self {
        Self {
            score: raw.score.round().clamp(0.0, 100.0) as u8,
            confidence: raw.confidence.clamp(0.0, 1.0),
            reasoning: raw.reasoning,
        }
    }
}

#[derive(Clone)]
pub struct TalentScorer {
    llm: Arc<dyn CompletionService>,
    deadline: Duration,
}

impl TalentScorer {
    pub fn new(llm: Arc<dyn CompletionService>, deadline: Duration) -> Self {
        Self { llm, deadline }
    }

    /// Scores one talent with a single outbound call.
    pub async fn rank_talent(&self, talent: &User, token: Option<&TalentToken>) -> TalentScore {
        match self.try_rank(talent, token).await {
            Ok(score) => {
                debug!("Scored talent {}: {}/100", talent.id, score.score);
                score
            }
            Err(e) => {
                warn!("Error ranking talent {}: {e}", talent.id);
                TalentScore::fallback()
            }
        }
    }

    async fn try_rank(
        &self,
        talent: &User,
        token: Option<&TalentToken>,
    ) -> Result<TalentScore, LlmError> {
        let prompt = build_score_prompt(talent, token);
        let system = json_system(SCORE_SYSTEM);
        let value = complete_within(self.llm.as_ref(), &prompt, &system, self.deadline).await?;
        let raw: RawScore = serde_json::from_value(value)?;
        Ok(raw.into())
    }
}
