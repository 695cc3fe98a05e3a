// src/infrastructure/security/claims.rs
use crate::application::{
    dto::{AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{
    tenant::TenantSlug,
    user::{TenantRole, UserId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload carried inside a bearer token. Timestamps are unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub name: String,
    pub tenant: String,
    pub role: TenantRole,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    pub fn for_subject(
        subject: &TokenSubject,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: subject.user_id.as_uuid(),
            name: subject.username.clone(),
            tenant: subject.tenant.to_string(),
            role: subject.role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    pub fn into_authenticated_user(self) -> ApplicationResult<AuthenticatedUser> {
        let id = UserId::new(self.sub).map_err(|_| ApplicationError::unauthorized("invalid subject"))?;
        let tenant = TenantSlug::new(self.tenant)
            .map_err(|_| ApplicationError::unauthorized("invalid tenant claim"))?;
        if self.name.trim().is_empty() {
            return Err(ApplicationError::unauthorized("missing username"));
        }
        let issued_at = timestamp(self.iat, "issued_at")?;
        let expires_at = timestamp(self.exp, "expires_at")?;

        Ok(AuthenticatedUser {
            id,
            username: self.name,
            tenant,
            role: self.role,
            capabilities: self.role.default_capabilities(),
            issued_at,
            expires_at,
        })
    }
}

fn timestamp(secs: i64, label: &str) -> ApplicationResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ApplicationError::unauthorized(format!("invalid {label}")))
}
