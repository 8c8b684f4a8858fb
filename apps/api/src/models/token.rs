use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Investable stake in a talent. Exactly one per talent user, provisioned by
/// the `provision_talent_token` trigger when the user row is inserted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TalentToken {
    pub id: i32,
    pub talent_id: i32,
    pub total_supply: i32,
    pub current_price: i32,
    pub goals: Vec<String>,
    pub milestones: Vec<String>,
}

#[cfg(test)]
pub const DEFAULT_TOTAL_SUPPLY: i32 = 1_000_000;
#[cfg(test)]
pub const DEFAULT_CURRENT_PRICE: i32 = 100;
#[cfg(test)]
const DEFAULT_GOALS: [&str; 2] = ["Become a top AI researcher", "Launch startup"];
#[cfg(test)]
const DEFAULT_MILESTONES: [&str; 2] = ["Completed AI certification", "Built MVP"];

#[cfg(test)]
impl TalentToken {
    /// Same values as the column defaults in `migrations/0001_init.sql`.
    pub fn default_for(id: i32, talent_id: i32) -> Self {
        Self {
            id,
            talent_id,
            total_supply: DEFAULT_TOTAL_SUPPLY,
            current_price: DEFAULT_CURRENT_PRICE,
            goals: DEFAULT_GOALS.iter().map(|s| s.to_string()).collect(),
            milestones: DEFAULT_MILESTONES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIGRATION: &str = include_str!("../../migrations/0001_init.sql");

    #[test]
    fn test_defaults_match_provisioning_migration() {
        assert!(MIGRATION.contains("AFTER INSERT ON users"));
        assert!(MIGRATION.contains("WHEN (NEW.role = 'talent')"));
        assert!(MIGRATION.contains(&format!("DEFAULT {DEFAULT_TOTAL_SUPPLY}")));
        assert!(MIGRATION.contains(&format!("DEFAULT {DEFAULT_CURRENT_PRICE}")));
        for text in DEFAULT_GOALS.iter().chain(DEFAULT_MILESTONES.iter()) {
            assert!(MIGRATION.contains(&format!("'{text}'")), "missing {text}");
        }
    }
}
