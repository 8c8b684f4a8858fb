//! Axum route handlers for rankings, the marketplace and recommendations.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::ranking::batch::rank_talents;
use crate::ranking::marketplace::{compose_listing, matches_query, MarketplaceEntry};
use crate::ranking::{SkillRecommendation, TalentScore};
use crate::state::AppState;
use crate::talents::fetch_tokens;

#[derive(Debug, Deserialize)]
pub struct MarketplaceQuery {
    pub q: Option<String>,
}

/// GET /api/talents/ranked
///
/// Scores every talent. Recomputed on each request.
pub async fn handle_ranked(
    State(state): State<AppState>,
) -> Result<Json<HashMap<i32, TalentScore>>, AppError> {
    let talents = state.store.get_all_talents().await?;
    let tokens = fetch_tokens(state.store.as_ref(), &talents).await?;
    let rankings = rank_talents(&state.scorer, &talents, &tokens, state.ranking_concurrency).await;
    Ok(Json(rankings))
}

/// GET /api/marketplace?q=
///
/// Talents with tokens and rankings, highest score first.
pub async fn handle_marketplace(
    State(state): State<AppState>,
    Query(params): Query<MarketplaceQuery>,
) -> Result<Json<Vec<MarketplaceEntry>>, AppError> {
    let query = params.q.as_deref();
    let talents: Vec<_> = state
        .store
        .get_all_talents()
        .await?
        .into_iter()
        .filter(|t| query.map_or(true, |q| matches_query(t, q)))
        .collect();

    let tokens = fetch_tokens(state.store.as_ref(), &talents).await?;
    let rankings = rank_talents(&state.scorer, &talents, &tokens, state.ranking_concurrency).await;

    info!("Marketplace listing built for {} talents", talents.len());
    Ok(Json(compose_listing(talents, &tokens, &rankings)))
}

/// GET /api/talents/:id/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Path(talent_id): Path<i32>,
    AuthUser(_caller): AuthUser,
) -> Result<Json<Vec<SkillRecommendation>>, AppError> {
    let talent = state
        .store
        .get_user(talent_id)
        .await?
        .filter(|u| u.is_talent())
        .ok_or_else(|| AppError::NotFound("Talent not found".to_string()))?;

    Ok(Json(state.recommender.recommend_skills(&talent).await))
}
