//! In-memory `Storage` used by unit and router tests. The seeding methods
//! stand in for the services that write users and investments in production.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::endorsement::ENDORSEMENT_WEIGHT;
use crate::models::{
    Investment, NewEndorsement, ProfileUpdate, Role, SkillEndorsement, TalentToken, User,
};
use crate::storage::Storage;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    tokens: Vec<TalentToken>,
    investments: Vec<Investment>,
    endorsements: Vec<SkillEndorsement>,
    sessions: HashMap<Uuid, i32>,
}

#[derive(Default)]
pub struct MemoryStorage {
    tables: Mutex<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session for the user and returns its id.
    pub fn open_session(&self, user_id: i32) -> Uuid {
        let id = Uuid::new_v4();
        self.tables.lock().unwrap().sessions.insert(id, user_id);
        id
    }

    /// Inserts a user; talents get a default token, as the provisioning
    /// trigger does.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::Validation(format!(
                "username '{}' is taken",
                new_user.username
            )));
        }

        let user = User {
            id: tables.users.len() as i32 + 1,
            username: new_user.username,
            role: new_user.role,
            name: new_user.name,
            bio: new_user.bio,
            skills: new_user.skills,
            portfolio: new_user.portfolio,
        };
        if user.role == Role::Talent {
            let token_id = tables.tokens.len() as i32 + 1;
            tables.tokens.push(TalentToken::default_for(token_id, user.id));
        }
        tables.users.push(user.clone());
        Ok(user)
    }

    pub async fn create_investment(&self, investment: NewInvestment) -> Result<Investment, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let created = Investment {
            id: tables.investments.len() as i32 + 1,
            investor_id: investment.investor_id,
            talent_id: investment.talent_id,
            amount: investment.amount,
            token_amount: investment.token_amount,
            timestamp: Utc::now(),
        };
        tables.investments.push(created.clone());
        Ok(created)
    }

    pub fn token_count(&self, talent_id: i32) -> usize {
        self.tables
            .lock()
            .unwrap()
            .tokens
            .iter()
            .filter(|t| t.talent_id == talent_id)
            .count()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_user(&self, id: i32) -> Result<Option<User>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn update_profile(
        &self,
        id: i32,
        update: ProfileUpdate,
    ) -> Result<Option<User>, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let Some(user) = tables.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(bio) = update.bio {
            user.bio = bio;
        }
        if let Some(skills) = update.skills {
            user.skills = skills;
        }
        if let Some(portfolio) = update.portfolio {
            user.portfolio = portfolio;
        }
        Ok(Some(user.clone()))
    }

    async fn get_talent_token(&self, talent_id: i32) -> Result<Option<TalentToken>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .tokens
            .iter()
            .find(|t| t.talent_id == talent_id)
            .cloned())
    }

    async fn get_investments(&self, user_id: i32) -> Result<Vec<Investment>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .investments
            .iter()
            .filter(|i| i.investor_id == user_id || i.talent_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_all_talents(&self) -> Result<Vec<User>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .filter(|u| u.is_talent())
            .cloned()
            .collect())
    }

    async fn create_endorsement(
        &self,
        endorsement: NewEndorsement,
    ) -> Result<SkillEndorsement, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let created = SkillEndorsement {
            id: tables.endorsements.len() as i32 + 1,
            talent_id: endorsement.talent_id,
            endorser_id: endorsement.endorser_id,
            skill: endorsement.skill,
            weight: ENDORSEMENT_WEIGHT,
            comment: endorsement.comment,
            timestamp: Utc::now(),
        };
        tables.endorsements.push(created.clone());
        Ok(created)
    }

    async fn get_endorsements_for_talent(
        &self,
        talent_id: i32,
    ) -> Result<Vec<SkillEndorsement>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .endorsements
            .iter()
            .filter(|e| e.talent_id == talent_id)
            .cloned()
            .collect())
    }

    async fn get_endorsements_by_skill(
        &self,
        talent_id: i32,
        skill: &str,
    ) -> Result<Vec<SkillEndorsement>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .endorsements
            .iter()
            .filter(|e| e.talent_id == talent_id && e.skill == skill)
            .cloned()
            .collect())
    }

    async fn session_user(&self, session_id: Uuid) -> Result<Option<User>, AppError> {
        let tables = self.tables.lock().unwrap();
        let Some(user_id) = tables.sessions.get(&session_id) else {
            return Ok(None);
        };
        Ok(tables.users.iter().find(|u| u.id == *user_id).cloned())
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub role: Role,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewInvestment {
    pub investor_id: i32,
    pub talent_id: i32,
    pub amount: i32,
    pub token_amount: i32,
}

/// Builds a `NewUser` with the given role and skills; remaining fields empty.
pub fn new_user(username: &str, role: Role, skills: &[&str]) -> NewUser {
    NewUser {
        username: username.to_string(),
        role,
        name: None,
        bio: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        portfolio: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::token::{DEFAULT_CURRENT_PRICE, DEFAULT_TOTAL_SUPPLY};

    #[tokio::test]
    async fn test_creating_talent_provisions_exactly_one_token() {
        let store = MemoryStorage::new();
        let talent = store
            .create_user(new_user("ada", Role::Talent, &["Rust"]))
            .await
            .unwrap();

        assert_eq!(store.token_count(talent.id), 1);
        let token = store.get_talent_token(talent.id).await.unwrap().unwrap();
        assert_eq!(token.total_supply, DEFAULT_TOTAL_SUPPLY);
        assert_eq!(token.total_supply, 1_000_000);
        assert_eq!(token.current_price, DEFAULT_CURRENT_PRICE);
        assert_eq!(token.current_price, 100);
    }

    #[tokio::test]
    async fn test_creating_investor_provisions_no_token() {
        let store = MemoryStorage::new();
        let investor = store
            .create_user(new_user("vc", Role::Investor, &[]))
            .await
            .unwrap();
        assert!(store.get_talent_token(investor.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all_talents_excludes_investors() {
        let store = MemoryStorage::new();
        store.create_user(new_user("ada", Role::Talent, &[])).await.unwrap();
        store.create_user(new_user("vc", Role::Investor, &[])).await.unwrap();
        store.create_user(new_user("bob", Role::Talent, &[])).await.unwrap();

        let talents = store.get_all_talents().await.unwrap();
        let names: Vec<_> = talents.iter().map(|t| t.username.as_str()).collect();
        assert_eq!(names, vec!["ada", "bob"]);
    }

    #[tokio::test]
    async fn test_investments_cover_both_sides() {
        let store = MemoryStorage::new();
        let talent = store.create_user(new_user("ada", Role::Talent, &[])).await.unwrap();
        let investor = store.create_user(new_user("vc", Role::Investor, &[])).await.unwrap();
        let other = store.create_user(new_user("bob", Role::Talent, &[])).await.unwrap();
        store
            .create_investment(NewInvestment {
                investor_id: investor.id,
                talent_id: talent.id,
                amount: 500,
                token_amount: 5,
            })
            .await
            .unwrap();

        assert_eq!(store.get_investments(investor.id).await.unwrap().len(), 1);
        assert_eq!(store.get_investments(talent.id).await.unwrap().len(), 1);
        assert!(store.get_investments(other.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_profile_clears_on_null_and_keeps_absent() {
        let store = MemoryStorage::new();
        let mut seed = new_user("ada", Role::Talent, &["Rust"]);
        seed.bio = Some("systems".to_string());
        seed.portfolio = Some("https://ada.dev".to_string());
        let talent = store.create_user(seed).await.unwrap();

        let update: ProfileUpdate =
            serde_json::from_str(r#"{"bio": null, "name": "Ada"}"#).unwrap();
        let updated = store.update_profile(talent.id, update).await.unwrap().unwrap();

        assert_eq!(updated.name.as_deref(), Some("Ada"));
        assert_eq!(updated.bio, None);
        assert_eq!(updated.portfolio.as_deref(), Some("https://ada.dev"));
        assert_eq!(updated.skills, vec!["Rust".to_string()]);
    }
}
