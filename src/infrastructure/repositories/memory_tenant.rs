// src/infrastructure/repositories/memory_tenant.rs
use crate::domain::{
    errors::{DomainError, DomainResult},
    tenant::{NewTenant, Tenant, TenantRepository, TenantSlug, TenantTheme},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Tenants keyed by slug; listing is ordered by slug.
#[derive(Default)]
pub struct InMemoryTenantRepository {
    tenants: RwLock<BTreeMap<TenantSlug, Tenant>>,
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn insert(&self, tenant: NewTenant) -> DomainResult<Tenant> {
        let mut tenants = self.tenants.write().await;
        if tenants.contains_key(&tenant.slug) {
            return Err(DomainError::Conflict(format!(
                "tenant '{}' already exists",
                tenant.slug
            )));
        }
        let tenant = Tenant::from(tenant);
        tenants.insert(tenant.slug.clone(), tenant.clone());
        Ok(tenant)
    }

    async fn find_by_slug(&self, slug: &TenantSlug) -> DomainResult<Option<Tenant>> {
        Ok(self.tenants.read().await.get(slug).cloned())
    }

    async fn update_theme(&self, slug: &TenantSlug, theme: TenantTheme) -> DomainResult<Tenant> {
        let mut tenants = self.tenants.write().await;
        let tenant = tenants
            .get_mut(slug)
            .ok_or_else(|| DomainError::not_found(format!("tenant '{slug}' not found")))?;
        tenant.theme = theme;
        Ok(tenant.clone())
    }

    async fn list(&self) -> DomainResult<Vec<Tenant>> {
        Ok(self.tenants.read().await.values().cloned().collect())
    }
}
