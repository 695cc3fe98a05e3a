use crate::domain::errors::DomainResult;
use crate::domain::team::entity::{NewTeam, NewTeamMember, Team, TeamMember};
use crate::domain::team::value_objects::{TeamId, TeamSlug};
use crate::domain::tenant::TenantSlug;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the slug is already used in the tenant.
    async fn insert(&self, team: NewTeam) -> DomainResult<Team>;
    async fn find_by_slug(&self, tenant: &TenantSlug, slug: &TeamSlug) -> DomainResult<Option<Team>>;
    async fn list_by_tenant(&self, tenant: &TenantSlug) -> DomainResult<Vec<Team>>;
}

#[async_trait]
pub trait TeamMemberRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the user is already a member.
    async fn add(&self, member: NewTeamMember) -> DomainResult<TeamMember>;
    async fn find(&self, team: TeamId, user: UserId) -> DomainResult<Option<TeamMember>>;
    /// Members in join order.
    async fn list(&self, team: TeamId) -> DomainResult<Vec<TeamMember>>;
    /// Fails with `DomainError::NotFound` for non-members and with
    /// `DomainError::Conflict` when the user is the team's last owner.
    async fn remove(&self, team: TeamId, user: UserId) -> DomainResult<TeamMember>;
}
