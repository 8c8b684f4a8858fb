//! Axum route handlers for skill endorsements.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::AuthUser;
use crate::endorsements::validation::{create_endorsement, EndorsementPayload};
use crate::errors::AppError;
use crate::models::SkillEndorsement;
use crate::state::AppState;

/// POST /api/talents/:id/endorsements
pub async fn handle_create_endorsement(
    State(state): State<AppState>,
    Path(talent_id): Path<i32>,
    AuthUser(endorser): AuthUser,
    payload: Result<Json<EndorsementPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<SkillEndorsement>), AppError> {
    let Json(payload) = payload?;
    let endorsement = create_endorsement(state.store.as_ref(), talent_id, &endorser, payload).await?;
    Ok((StatusCode::CREATED, Json(endorsement)))
}

/// GET /api/talents/:id/endorsements
pub async fn handle_list_endorsements(
    State(state): State<AppState>,
    Path(talent_id): Path<i32>,
) -> Result<Json<Vec<SkillEndorsement>>, AppError> {
    Ok(Json(
        state.store.get_endorsements_for_talent(talent_id).await?,
    ))
}

/// GET /api/talents/:id/endorsements/:skill
pub async fn handle_list_endorsements_by_skill(
    State(state): State<AppState>,
    Path((talent_id, skill)): Path<(i32, String)>,
) -> Result<Json<Vec<SkillEndorsement>>, AppError> {
    Ok(Json(
        state
            .store
            .get_endorsements_by_skill(talent_id, &skill)
            .await?,
    ))
}
