//! Persistence accessor: the only module that talks to the relational store.
//!
//! Handlers and services receive an `Arc<dyn Storage>` so tests can swap in
//! the in-memory implementation. Users, sessions and investments are written
//! by other services; talent tokens are provisioned by a database trigger.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    Investment, NewEndorsement, ProfileUpdate, SkillEndorsement, TalentToken, User,
};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStorage;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user(&self, id: i32) -> Result<Option<User>, AppError>;

    /// Returns `None` when the user does not exist.
    async fn update_profile(
        &self,
        id: i32,
        update: ProfileUpdate,
    ) -> Result<Option<User>, AppError>;

    async fn get_talent_token(&self, talent_id: i32) -> Result<Option<TalentToken>, AppError>;

    /// Investments where the user is either the investor or the talent.
    async fn get_investments(&self, user_id: i32) -> Result<Vec<Investment>, AppError>;

    /// All talent-role users, ordered by id.
    async fn get_all_talents(&self) -> Result<Vec<User>, AppError>;

    async fn create_endorsement(
        &self,
        endorsement: NewEndorsement,
    ) -> Result<SkillEndorsement, AppError>;

    async fn get_endorsements_for_talent(
        &self,
        talent_id: i32,
    ) -> Result<Vec<SkillEndorsement>, AppError>;

    /// Exact, case-sensitive skill match.
    async fn get_endorsements_by_skill(
        &self,
        talent_id: i32,
        skill: &str,
    ) -> Result<Vec<SkillEndorsement>, AppError>;

    /// Resolves an unexpired session to its user.
    async fn session_user(&self, session_id: Uuid) -> Result<Option<User>, AppError>;
}
