//! Axum route handlers for talents, tokens and investments.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{Investment, ProfileUpdate, TalentToken, User};
use crate::state::AppState;

/// GET /api/talents
pub async fn handle_list_talents(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.store.get_all_talents().await?))
}

/// GET /api/talents/:id/tokens
pub async fn handle_get_token(
    State(state): State<AppState>,
    Path(talent_id): Path<i32>,
) -> Result<Json<TalentToken>, AppError> {
    let token = state
        .store
        .get_talent_token(talent_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Token not found".to_string()))?;
    Ok(Json(token))
}

/// PATCH /api/talents/:id
///
/// Partial profile update. Only the profile's owner may call it.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    AuthUser(caller): AuthUser,
    payload: Result<Json<ProfileUpdate>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    if caller.id != user_id {
        return Err(AppError::Forbidden);
    }

    let Json(update) = payload?;
    update.validate().map_err(AppError::Validation)?;

    let user = state
        .store
        .update_profile(user_id, update)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    info!("User {user_id} updated their profile");
    Ok(Json(user))
}

/// GET /api/investments/:userId
///
/// Investments where the user is either side of the deal.
pub async fn handle_get_investments(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    AuthUser(_caller): AuthUser,
) -> Result<Json<Vec<Investment>>, AppError> {
    Ok(Json(state.store.get_investments(user_id).await?))
}
