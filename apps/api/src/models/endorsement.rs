use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Weight recorded for every new endorsement. Not caller-configurable.
pub const ENDORSEMENT_WEIGHT: i32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SkillEndorsement {
    pub id: i32,
    pub talent_id: i32,
    pub endorser_id: i32,
    pub skill: String,
    pub weight: i32,
    pub comment: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A validated endorsement ready to be stored.
#[derive(Debug, Clone)]
pub struct NewEndorsement {
    pub talent_id: i32,
    pub endorser_id: i32,
    pub skill: String,
    pub comment: Option<String>,
}
