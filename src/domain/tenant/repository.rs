use crate::domain::errors::DomainResult;
use crate::domain::tenant::entity::{NewTenant, Tenant, TenantTheme};
use crate::domain::tenant::value_objects::TenantSlug;
use async_trait::async_trait;

#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the slug is taken.
    async fn insert(&self, tenant: NewTenant) -> DomainResult<Tenant>;
    async fn find_by_slug(&self, slug: &TenantSlug) -> DomainResult<Option<Tenant>>;
    async fn update_theme(&self, slug: &TenantSlug, theme: TenantTheme) -> DomainResult<Tenant>;
    async fn list(&self) -> DomainResult<Vec<Tenant>>;
}
