//! Marketplace view: talents with their tokens and rankings, best first.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{TalentToken, User};
use crate::ranking::scorer::TalentScore;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceEntry {
    pub talent: User,
    pub token: Option<TalentToken>,
    pub ranking: Option<TalentScore>,
}

/// Marketplace search: case-insensitive substring match on username or any skill.
pub fn matches_query(talent: &User, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    talent.username.to_lowercase().contains(&query)
        || talent
            .skills
            .iter()
            .any(|s| s.to_lowercase().contains(&query))
}

/// Sorts descending by score.
///
/// Talents without a score rank as 0. The sort is stable, so ties keep the
/// input order (the store lists talents by id).
pub fn compose_listing(
    talents: Vec<User>,
    tokens: &HashMap<i32, TalentToken>,
    rankings: &HashMap<i32, TalentScore>,
) -> Vec<MarketplaceEntry> {
    let mut entries: Vec<MarketplaceEntry> = talents
        .into_iter()
        .map(|talent| MarketplaceEntry {
            token: tokens.get(&talent.id).cloned(),
            ranking: rankings.get(&talent.id).cloned(),
            talent,
        })
        .collect();

    entries.sort_by(|a, b| score_of(b).cmp(&score_of(a)));
    entries
}

fn score_of(entry: &MarketplaceEntry) -> u8 {
    entry.ranking.as_ref().map_or(0, |r| r.score)
}
