use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::endorsement::ENDORSEMENT_WEIGHT;
use crate::models::{
    Investment, NewEndorsement, ProfileUpdate, SkillEndorsement, TalentToken, User,
};
use crate::storage::Storage;

const USER_COLUMNS: &str = "id, username, role, name, bio, skills, portfolio";

/// sqlx-backed storage over PostgreSQL.
#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn get_user(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn update_profile(
        &self,
        id: i32,
        update: ProfileUpdate,
    ) -> Result<Option<User>, AppError> {
        // $2/$4/$7 flag which nullable columns the caller sent; sent nulls clear.
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users SET
                name = CASE WHEN $2 THEN $3 ELSE name END,
                bio = CASE WHEN $4 THEN $5 ELSE bio END,
                skills = COALESCE($6, skills),
                portfolio = CASE WHEN $7 THEN $8 ELSE portfolio END
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(update.name.is_some())
        .bind(update.name.flatten())
        .bind(update.bio.is_some())
        .bind(update.bio.flatten())
        .bind(update.skills)
        .bind(update.portfolio.is_some())
        .bind(update.portfolio.flatten())
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn get_talent_token(&self, talent_id: i32) -> Result<Option<TalentToken>, AppError> {
        let token = sqlx::query_as::<_, TalentToken>(
            r#"
            SELECT id, talent_id, total_supply, current_price, goals, milestones
            FROM talent_tokens
            WHERE talent_id = $1
            "#,
        )
        .bind(talent_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(token)
    }

    async fn get_investments(&self, user_id: i32) -> Result<Vec<Investment>, AppError> {
        let investments = sqlx::query_as::<_, Investment>(
            r#"
            SELECT id, investor_id, talent_id, amount, token_amount, timestamp
            FROM investments
            WHERE investor_id = $1 OR talent_id = $1
            ORDER BY timestamp, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(investments)
    }

    async fn get_all_talents(&self) -> Result<Vec<User>, AppError> {
        let talents = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = 'talent' ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(talents)
    }

    async fn create_endorsement(
        &self,
        endorsement: NewEndorsement,
    ) -> Result<SkillEndorsement, AppError> {
        let created = sqlx::query_as::<_, SkillEndorsement>(
            r#"
            INSERT INTO skill_endorsements (talent_id, endorser_id, skill, weight, comment, timestamp)
            VALUES ($1, $2, $3, $4, $5, now())
            RETURNING id, talent_id, endorser_id, skill, weight, comment, timestamp
            "#,
        )
        .bind(endorsement.talent_id)
        .bind(endorsement.endorser_id)
        .bind(&endorsement.skill)
        .bind(ENDORSEMENT_WEIGHT)
        .bind(&endorsement.comment)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "User {} endorsed '{}' for talent {}",
            created.endorser_id, created.skill, created.talent_id
        );
        Ok(created)
    }

    async fn get_endorsements_for_talent(
        &self,
        talent_id: i32,
    ) -> Result<Vec<SkillEndorsement>, AppError> {
        let endorsements = sqlx::query_as::<_, SkillEndorsement>(
            r#"
            SELECT id, talent_id, endorser_id, skill, weight, comment, timestamp
            FROM skill_endorsements
            WHERE talent_id = $1
            ORDER BY id
            "#,
        )
        .bind(talent_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(endorsements)
    }

    async fn get_endorsements_by_skill(
        &self,
        talent_id: i32,
        skill: &str,
    ) -> Result<Vec<SkillEndorsement>, AppError> {
        let endorsements = sqlx::query_as::<_, SkillEndorsement>(
            r#"
            SELECT id, talent_id, endorser_id, skill, weight, comment, timestamp
            FROM skill_endorsements
            WHERE talent_id = $1 AND skill = $2
            ORDER BY id
            "#,
        )
        .bind(talent_id)
        .bind(skill)
        .fetch_all(&self.pool)
        .await?;
        Ok(endorsements)
    }

    async fn session_user(&self, session_id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.username, u.role, u.name, u.bio, u.skills, u.portfolio
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.id = $1 AND s.expires_at > now()
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
