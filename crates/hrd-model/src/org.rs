use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::ids::{DepartmentId, TeamId, UserId};

/// Organizational unit an employee belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

/// Named team with a URL-safe slug and one owning user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub slug: String,
    pub member_id: UserId,
}

impl Team {
    /// Build a team, deriving the slug from the display name.
    pub fn from_name(
        id: TeamId,
        name: impl Into<String>,
        member_id: UserId,
    ) -> Result<Self, ModelError> {
        let name = name.into().trim().to_string();
        let slug = slugify(&name);
        if slug.is_empty() {
            return Err(ModelError::EmptyField { field: "slug" });
        }
        Ok(Self {
            id,
            name,
            slug,
            member_id,
        })
    }
}

/// Lowercase the input and collapse runs of non-alphanumeric characters
/// into single dashes, with no leading or trailing dash.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
