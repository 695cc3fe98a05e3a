// src/application/commands/tenants/provision.rs
use super::TenantCommandService;
use crate::{
    application::{
        dto::TenantDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        tenant::{
            NewTenant, TenantName, TenantSlug,
            value_objects::{MAX_SLUG_LEN, truncate_slug},
        },
    },
};

pub struct ProvisionTenantCommand {
    pub name: String,
}

impl TenantCommandService {
    /// System-level operation used when seeding tenants at startup.
    pub async fn provision_tenant(
        &self,
        command: ProvisionTenantCommand,
    ) -> ApplicationResult<TenantDto> {
        let name = TenantName::new(command.name)?;
        let slug = self.slugger.slugify_trimmed(name.as_str());
        if slug.is_empty() {
            return Err(ApplicationError::validation(format!(
                "tenant name '{name}' does not produce a usable slug"
            )));
        }
        let slug = TenantSlug::new(truncate_slug(&slug, MAX_SLUG_LEN))?;

        let tenant = NewTenant::new(slug, name, self.clock.now())?;
        let created = self
            .tenant_repo
            .insert(tenant)
            .await
            .map_err(|err| match err {
                DomainError::Conflict(msg) => ApplicationError::conflict(msg),
                other => other.into(),
            })?;

        tracing::info!(tenant = %created.slug, name = %created.name, "tenant provisioned");
        Ok(created.into())
    }
}
