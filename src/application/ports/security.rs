// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use async_trait::async_trait;

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    /// Verify a bearer token and resolve the user it was issued for.
    /// Malformed, tampered and expired tokens all yield `Unauthorized`.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
