// src/application/access.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::team::{Team, TeamRepository, TeamSlug},
};

pub(crate) fn ensure_capability(
    actor: &AuthenticatedUser,
    resource: &str,
    action: &str,
) -> ApplicationResult<()> {
    if actor.has_capability(resource, action) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "missing capability {resource}:{action}"
        )))
    }
}

/// Resolve a team by slug inside the actor's tenant.
///
/// Teams of other tenants and malformed slugs both surface as not found so
/// callers cannot probe for teams outside their tenant.
pub(crate) async fn team_in_actor_tenant(
    repo: &dyn TeamRepository,
    actor: &AuthenticatedUser,
    slug: &str,
) -> ApplicationResult<Team> {
    let not_found = || ApplicationError::not_found(format!("team '{slug}' not found"));
    let slug = TeamSlug::new(slug).map_err(|_| not_found())?;
    repo.find_by_slug(&actor.tenant, &slug)
        .await?
        .ok_or_else(not_found)
}
