use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Immutable record of an investor funding a talent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: i32,
    pub investor_id: i32,
    pub talent_id: i32,
    pub amount: i32,
    pub token_amount: i32,
    pub timestamp: DateTime<Utc>,
}
