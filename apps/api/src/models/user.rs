use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// Marketplace role. A user is either a talent or an investor, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Talent,
    Investor,
}

#[derive(Debug, Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(String);

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "talent" => Ok(Role::Talent),
            "investor" => Ok(Role::Investor),
            _ => Err(UnknownRole(value)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub name: Option<String>,
    pub bio: Option<String>,
    /// Ordered, distinct. Authoritative for endorsement validation.
    pub skills: Vec<String>,
    pub portfolio: Option<String>,
}

impl User {
    pub fn is_talent(&self) -> bool {
        self.role == Role::Talent
    }

    /// Name if set and not blank, otherwise the username.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }

    /// Exact, case-sensitive membership.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

/// Partial profile update.
///
/// An absent field is left unchanged. An explicit `null` clears `name`, `bio`
/// or `portfolio`; `skills` must be a list when present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfileUpdate {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "present")]
    pub portfolio: Option<Option<String>>,
}

/// Marks a field as present, keeping `null` distinct from a missing key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl ProfileUpdate {
    /// Returns a description of the first problem found, if any.
    pub fn validate(&self) -> Result<(), String> {
        let Some(skills) = &self.skills else {
            return Ok(());
        };

        let mut seen = HashSet::new();
        for skill in skills {
            if skill.trim().is_empty() {
                return Err("skills: entries must not be blank".to_string());
            }
            if !seen.insert(skill.as_str()) {
                return Err(format!("skills: duplicate entry '{skill}'"));
            }
        }
        Ok(())
    }
}
