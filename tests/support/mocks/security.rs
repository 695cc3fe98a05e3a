// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use teamhub::{
    application::{
        ApplicationResult,
        dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
        error::ApplicationError,
        ports::security::TokenManager,
    },
    domain::{
        tenant::TenantSlug,
        user::{TenantRole, UserId},
    },
};
use uuid::Uuid;

/// Tenant admin of "acme".
pub const ACME_ADMIN_TOKEN: &str = "acme-admin";
/// Plain members of "acme".
pub const ALICE_TOKEN: &str = "alice";
pub const BOB_TOKEN: &str = "bob";
/// Tenant admin of "globex".
pub const GLOBEX_ADMIN_TOKEN: &str = "globex-admin";
pub const EXPIRED_TOKEN: &str = "expired-token";

pub const ACME_ADMIN_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0001);
pub const ALICE_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0002);
pub const BOB_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0003);
pub const GLOBEX_ADMIN_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0004);

/// Maps fixed bearer strings to users; any other token is rejected.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Err(ApplicationError::infrastructure("not implemented"))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ACME_ADMIN_TOKEN => Ok(user_for(ACME_ADMIN_ID, "root", "acme", TenantRole::Admin)),
            ALICE_TOKEN => Ok(user_for(ALICE_ID, "alice", "acme", TenantRole::Member)),
            BOB_TOKEN => Ok(user_for(BOB_ID, "bob", "acme", TenantRole::Member)),
            GLOBEX_ADMIN_TOKEN => Ok(user_for(
                GLOBEX_ADMIN_ID,
                "gadmin",
                "globex",
                TenantRole::Admin,
            )),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("token expired")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

pub fn user_for(id: Uuid, username: &str, tenant: &str, role: TenantRole) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        tenant: TenantSlug::new(tenant).expect("invalid tenant slug"),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}
