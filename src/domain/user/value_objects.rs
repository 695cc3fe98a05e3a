// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};
use utoipa::ToSchema;
use uuid::Uuid;

/// Identifier of a user managed by the upstream identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new(id: Uuid) -> DomainResult<Self> {
        if id.is_nil() {
            Err(DomainError::validation("user id must not be the nil uuid"))
        } else {
            Ok(Self(id))
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        let id = Uuid::parse_str(value.trim())
            .map_err(|_| DomainError::validation("user id must be a valid uuid"))?;
        Self::new(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<UserId> for Uuid {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

/// Role a user holds within their tenant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TenantRole {
    Admin,
    #[default]
    Member,
}

impl TenantRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantRole::Admin => "admin",
            TenantRole::Member => "member",
        }
    }

    pub fn default_capabilities(&self) -> HashSet<Capability> {
        use Capability as Cap;
        match self {
            TenantRole::Admin => HashSet::from([
                Cap::new("teams", "create"),
                Cap::new("teams", "manage"),
                Cap::new("tenant", "update_theme"),
            ]),
            TenantRole::Member => HashSet::from([Cap::new("teams", "create")]),
        }
    }
}

impl fmt::Display for TenantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TenantRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(TenantRole::Admin),
            "member" => Ok(TenantRole::Member),
            other => Err(DomainError::Validation(format!("unknown tenant role '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_rejects_nil_and_garbage() {
        assert!(UserId::new(Uuid::nil()).is_err());
        assert!(UserId::parse("not-a-uuid").is_err());
        assert!(UserId::parse("00000000-0000-0000-0000-000000000000").is_err());
    }

    #[test]
    fn user_id_parses_hyphenated_uuid() {
        let id = UserId::parse("8c1f3c4e-3a52-4a8f-9a0e-2f1f7f3b9d11").unwrap();
        assert_eq!(id.to_string(), "8c1f3c4e-3a52-4a8f-9a0e-2f1f7f3b9d11");
    }

    #[test]
    fn admin_can_manage_teams_but_member_cannot() {
        let admin = TenantRole::Admin.default_capabilities();
        let member = TenantRole::Member.default_capabilities();
        assert!(admin.iter().any(|c| c.matches("teams", "manage")));
        assert!(!member.iter().any(|c| c.matches("teams", "manage")));
        assert!(member.iter().any(|c| c.matches("teams", "create")));
    }
}
