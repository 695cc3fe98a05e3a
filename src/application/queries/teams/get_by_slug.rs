use super::TeamQueryService;
use crate::application::{
    ApplicationResult,
    access::team_in_actor_tenant,
    dto::{AuthenticatedUser, TeamDto},
};

pub struct GetTeamQuery {
    pub slug: String,
}

impl TeamQueryService {
    pub async fn get_team(
        &self,
        actor: &AuthenticatedUser,
        query: GetTeamQuery,
    ) -> ApplicationResult<TeamDto> {
        team_in_actor_tenant(self.team_repo.as_ref(), actor, &query.slug)
            .await
            .map(TeamDto::from)
    }
}
