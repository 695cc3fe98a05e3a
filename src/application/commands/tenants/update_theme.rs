// src/application/commands/tenants/update_theme.rs
use super::TenantCommandService;
use crate::{
    application::{
        access::ensure_capability,
        dto::{AuthenticatedUser, TenantThemeDto, UpdateThemeRequest, ValidationErrors},
        error::{ApplicationError, ApplicationResult},
    },
    domain::tenant::ThemePatch,
};

pub struct UpdateThemeCommand {
    pub patch: ThemePatch,
}

impl UpdateThemeCommand {
    pub fn try_new(request: &UpdateThemeRequest) -> Result<Self, ValidationErrors> {
        Ok(Self {
            patch: request.validate()?,
        })
    }
}

impl TenantCommandService {
    /// Update the theme of the actor's own tenant.
    pub async fn update_theme(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateThemeCommand,
    ) -> ApplicationResult<TenantThemeDto> {
        ensure_capability(actor, "tenant", "update_theme")?;

        let tenant = self
            .tenant_repo
            .find_by_slug(&actor.tenant)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("tenant '{}' not found", actor.tenant)))?;

        let mut theme = tenant.theme;
        theme.apply(command.patch);
        let updated = self.tenant_repo.update_theme(&actor.tenant, theme).await?;

        tracing::info!(
            tenant = %updated.slug,
            mode = updated.theme.mode.as_str(),
            updated_by = %actor.id,
            "tenant theme updated"
        );
        Ok(updated.into())
    }
}
