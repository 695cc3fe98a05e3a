// src/application/commands/teams/remove_member.rs
use super::TeamCommandService;
use crate::{
    application::{
        access::team_in_actor_tenant,
        dto::{AuthenticatedUser, TeamMemberDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        team::{MemberRole, Team},
        user::UserId,
    },
};

pub struct RemoveMemberCommand {
    pub team_slug: String,
    pub user_id: String,
}

impl TeamCommandService {
    pub async fn remove_member(
        &self,
        actor: &AuthenticatedUser,
        command: RemoveMemberCommand,
    ) -> ApplicationResult<TeamMemberDto> {
        let user_id = UserId::parse(&command.user_id)?;
        let team = team_in_actor_tenant(self.team_repo.as_ref(), actor, &command.team_slug).await?;

        let leaving_self = user_id == actor.id;
        if !leaving_self && !actor.has_capability("teams", "manage") {
            self.ensure_can_remove(actor, &team, user_id).await?;
        }

        let removed = self
            .member_repo
            .remove(team.id, user_id)
            .await
            .map_err(|err| match err {
                DomainError::NotFound(_) => ApplicationError::not_found(format!(
                    "user {user_id} is not a member of '{}'",
                    team.slug
                )),
                DomainError::Conflict(_) => ApplicationError::conflict(format!(
                    "cannot remove the last owner of '{}'",
                    team.slug
                )),
                other => other.into(),
            })?;

        tracing::info!(
            team = %team.slug,
            user = %removed.user_id,
            removed_by = %actor.id,
            "member removed"
        );
        Ok(removed.into())
    }

    /// Team owners and admins may remove members; only owners may remove owners.
    async fn ensure_can_remove(
        &self,
        actor: &AuthenticatedUser,
        team: &Team,
        user_id: UserId,
    ) -> ApplicationResult<()> {
        let membership = self.member_repo.find(team.id, actor.id).await?;
        let target = self.member_repo.find(team.id, user_id).await?;
        match (membership, target) {
            (Some(m), Some(t)) if t.is_owner() && m.role != MemberRole::Owner => Err(
                ApplicationError::forbidden("only team owners can remove owners"),
            ),
            (Some(m), _) if m.role.can_manage_members() => Ok(()),
            _ => Err(ApplicationError::forbidden(format!(
                "not allowed to manage members of '{}'",
                team.slug
            ))),
        }
    }
}
