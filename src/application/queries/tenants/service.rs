// src/application/queries/tenants/service.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        dto::{TenantDto, TenantThemeDto},
        error::ApplicationError,
    },
    domain::tenant::{TenantRepository, TenantSlug},
};

pub struct GetTenantThemeQuery {
    pub tenant_slug: String,
}

pub struct TenantQueryService {
    tenant_repo: Arc<dyn TenantRepository>,
}

impl TenantQueryService {
    pub fn new(tenant_repo: Arc<dyn TenantRepository>) -> Self {
        Self { tenant_repo }
    }

    /// Public lookup; unknown and malformed slugs are both reported as not found.
    pub async fn get_theme(&self, query: GetTenantThemeQuery) -> ApplicationResult<TenantThemeDto> {
        let not_found = || ApplicationError::not_found(format!("tenant '{}' not found", query.tenant_slug));
        let slug = TenantSlug::new(query.tenant_slug.clone()).map_err(|_| not_found())?;
        self.tenant_repo
            .find_by_slug(&slug)
            .await?
            .map(TenantThemeDto::from)
            .ok_or_else(not_found)
    }

    pub async fn list_tenants(&self) -> ApplicationResult<Vec<TenantDto>> {
        let tenants = self.tenant_repo.list().await?;
        Ok(tenants.into_iter().map(TenantDto::from).collect())
    }
}
