// src/application/commands/teams/create.rs
use super::TeamCommandService;
use crate::{
    application::{
        access::ensure_capability,
        dto::{AuthenticatedUser, TeamDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        team::{MemberRole, NewTeam, NewTeamMember, TeamName},
    },
};

pub struct CreateTeamCommand {
    pub name: String,
}

impl TeamCommandService {
    /// Create a team in the actor's tenant and enrol the actor as its owner.
    pub async fn create_team(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTeamCommand,
    ) -> ApplicationResult<TeamDto> {
        ensure_capability(actor, "teams", "create")?;

        let name = TeamName::new(command.name)?;
        let now = self.clock.now();

        // A concurrent create may claim the slug between generation and insert.
        let mut attempts = 0;
        let team = loop {
            let slug = self
                .slug_service
                .generate_unique_slug(&actor.tenant, &name)
                .await?;
            let new_team = NewTeam {
                tenant: actor.tenant.clone(),
                name: name.clone(),
                slug,
                created_by: actor.id,
                created_at: now,
            };
            match self.team_repo.insert(new_team).await {
                Ok(team) => break team,
                Err(DomainError::Conflict(_)) if attempts < 3 => attempts += 1,
                Err(DomainError::Conflict(msg)) => return Err(ApplicationError::conflict(msg)),
                Err(err) => return Err(err.into()),
            }
        };

        self.member_repo
            .add(NewTeamMember {
                team_id: team.id,
                user_id: actor.id,
                role: MemberRole::Owner,
                added_by: None,
                joined_at: now,
            })
            .await?;

        tracing::info!(
            tenant = %team.tenant,
            team = %team.slug,
            owner = %actor.id,
            "team created"
        );
        Ok(team.into())
    }
}
