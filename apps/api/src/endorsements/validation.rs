//! Endorsement rules.
//!
//! Checked in order: the target exists and is a talent (404), then the skill
//! is one the talent declares, matched exactly and case-sensitively (400).
//! Authentication and payload shape are enforced by the extractors before
//! these rules run.
//!
//! Repeat endorsements by the same endorser are accepted; see DESIGN.md.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{NewEndorsement, SkillEndorsement, User};
use crate::storage::Storage;

/// Request body for POST /api/talents/:id/endorsements.
/// Talent and endorser ids come from the path and the session, never the body.
#[derive(Debug, Clone, Deserialize)]
pub struct EndorsementPayload {
    pub skill: String,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Applies the endorsement rules to an already-loaded target.
pub fn check_endorsement(
    target: Option<&User>,
    talent_id: i32,
    endorser_id: i32,
    payload: EndorsementPayload,
) -> Result<NewEndorsement, AppError> {
    let talent = target
        .filter(|u| u.is_talent())
        .ok_or_else(|| AppError::NotFound("Talent not found".to_string()))?;

    if !talent.has_skill(&payload.skill) {
        return Err(AppError::Validation(format!(
            "skill: '{}' is not listed in the talent's profile",
            payload.skill
        )));
    }

    Ok(NewEndorsement {
        talent_id,
        endorser_id,
        skill: payload.skill,
        comment: payload.comment,
    })
}

/// Validates and stores an endorsement of `talent_id` by `endorser`.
pub async fn create_endorsement(
    store: &dyn Storage,
    talent_id: i32,
    endorser: &User,
    payload: EndorsementPayload,
) -> Result<SkillEndorsement, AppError> {
    let target = store.get_user(talent_id).await?;
    let endorsement = check_endorsement(target.as_ref(), talent_id, endorser.id, payload)?;
    store.create_endorsement(endorsement).await
}
