// Talent listing, tokens, profile updates and investments.

pub mod handlers;

use std::collections::HashMap;

use futures::future::try_join_all;

use crate::errors::AppError;
use crate::models::{TalentToken, User};
use crate::storage::Storage;

/// Looks up every talent's token concurrently and keys them by talent id.
/// Talents without a token are simply absent from the map.
pub async fn fetch_tokens(
    store: &dyn Storage,
    talents: &[User],
) -> Result<HashMap<i32, TalentToken>, AppError> {
    let lookups = talents.iter().map(|t| store.get_talent_token(t.id));
    let tokens = try_join_all(lookups).await?;

    Ok(talents
        .iter()
        .zip(tokens)
        .filter_map(|(talent, token)| token.map(|t| (talent.id, t)))
        .collect())
}
