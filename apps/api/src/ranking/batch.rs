//! Batch ranking: scores every talent in the marketplace.
//!
//! Default is strictly sequential: each talent's scoring completes (or falls
//! back) before the next call starts, keeping load on the generation service
//! flat regardless of marketplace size. A concurrency above 1 runs a bounded
//! pool with at most that many calls in flight.

use std::collections::HashMap;

use futures::stream::{self, StreamExt};
use tracing::info;

use crate::models::{TalentToken, User};
use crate::ranking::scorer::{TalentScore, TalentScorer};

/// Returns exactly one score per input talent id. Never fails.
pub async fn rank_talents(
    scorer: &TalentScorer,
    talents: &[User],
    tokens: &HashMap<i32, TalentToken>,
    concurrency: usize,
) -> HashMap<i32, TalentScore> {
    info!(
        "Ranking {} talents (concurrency {})",
        talents.len(),
        concurrency.max(1)
    );

    if concurrency <= 1 {
        let mut rankings = HashMap::with_capacity(talents.len());
        for talent in talents {
            let score = scorer.rank_talent(talent, tokens.get(&talent.id)).await;
            rankings.insert(talent.id, score);
        }
        return rankings;
    }

    // Futures are built up front so the stream holds concrete, Send futures.
    let calls: Vec<_> = talents
        .iter()
        .map(|talent| {
            let token = tokens.get(&talent.id);
            async move { (talent.id, scorer.rank_talent(talent, token).await) }
        })
        .collect();

    stream::iter(calls)
        .buffer_unordered(concurrency)
        .collect()
        .await
}
