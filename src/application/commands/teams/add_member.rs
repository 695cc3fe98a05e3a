// src/application/commands/teams/add_member.rs
use super::TeamCommandService;
use crate::{
    application::{
        access::team_in_actor_tenant,
        dto::{AddMemberRequest, AuthenticatedUser, TeamMemberDto, ValidationErrors},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        team::{MemberRole, NewTeamMember, Team},
        user::UserId,
    },
};

pub struct AddMemberCommand {
    pub team_slug: String,
    pub user_id: UserId,
    pub role: MemberRole,
}

impl AddMemberCommand {
    /// Validate a raw payload into a command for the given team.
    pub fn try_new(
        team_slug: impl Into<String>,
        request: &AddMemberRequest,
    ) -> Result<Self, ValidationErrors> {
        let valid = request.validate()?;
        Ok(Self {
            team_slug: team_slug.into(),
            user_id: valid.user_id,
            role: valid.role,
        })
    }
}

impl TeamCommandService {
    pub async fn add_member(
        &self,
        actor: &AuthenticatedUser,
        command: AddMemberCommand,
    ) -> ApplicationResult<TeamMemberDto> {
        let team = team_in_actor_tenant(self.team_repo.as_ref(), actor, &command.team_slug).await?;
        self.ensure_can_grant(actor, &team, command.role).await?;

        let member = self
            .member_repo
            .add(NewTeamMember {
                team_id: team.id,
                user_id: command.user_id,
                role: command.role,
                added_by: Some(actor.id),
                joined_at: self.clock.now(),
            })
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => ApplicationError::conflict(format!(
                    "user {} is already a member of '{}'",
                    command.user_id, team.slug
                )),
                other => other.into(),
            })?;

        tracing::info!(
            team = %team.slug,
            user = %member.user_id,
            role = %member.role,
            added_by = %actor.id,
            "member added"
        );
        Ok(member.into())
    }

    /// Team owners and admins may add members; only owners may add owners.
    /// Tenant-wide team managers may do both.
    async fn ensure_can_grant(
        &self,
        actor: &AuthenticatedUser,
        team: &Team,
        role: MemberRole,
    ) -> ApplicationResult<()> {
        if actor.has_capability("teams", "manage") {
            return Ok(());
        }

        let membership = self.member_repo.find(team.id, actor.id).await?;
        match membership {
            Some(m) if role == MemberRole::Owner && !m.is_owner() => Err(
                ApplicationError::forbidden("only team owners can add owners"),
            ),
            Some(m) if m.role.can_manage_members() => Ok(()),
            _ => Err(ApplicationError::forbidden(format!(
                "not allowed to manage members of '{}'",
                team.slug
            ))),
        }
    }
}
