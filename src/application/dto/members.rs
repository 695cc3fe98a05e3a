// src/application/dto/members.rs
use crate::domain::{team::MemberRole, user::UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::ValidationErrors;

/// Payload for adding a user to a team.
///
/// Fields are kept loosely typed so that every problem can be reported per
/// field by [`AddMemberRequest::validate`] instead of failing on the first
/// deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddMemberRequest {
    /// UUID of the user to add.
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
    /// One of `owner`, `admin`, `member`. Defaults to `member`.
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMember {
    pub user_id: UserId,
    pub role: MemberRole,
}

impl AddMemberRequest {
    pub fn validate(&self) -> Result<ValidatedMember, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let user_id = match self.user_id.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push("user_id", "user_id is required");
                None
            }
            Some(raw) => match UserId::parse(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push("user_id", "user_id must be a valid uuid");
                    None
                }
            },
        };

        let role = match self.role.as_deref() {
            None => Some(MemberRole::default()),
            Some(raw) => match raw.parse::<MemberRole>() {
                Ok(role) => Some(role),
                Err(_) => {
                    errors.push("role", role_choices_message());
                    None
                }
            },
        };

        match (user_id, role) {
            (Some(user_id), Some(role)) if errors.is_empty() => Ok(ValidatedMember { user_id, role }),
            _ => Err(errors),
        }
    }
}

fn role_choices_message() -> String {
    let names: Vec<&str> = MemberRole::ALL.iter().map(MemberRole::as_str).collect();
    format!("role must be one of: {}", names.join(", "))
}
