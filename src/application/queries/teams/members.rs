use super::TeamQueryService;
use crate::application::{
    ApplicationResult,
    access::team_in_actor_tenant,
    dto::{AuthenticatedUser, TeamMemberDto},
};

pub struct ListMembersQuery {
    pub team_slug: String,
}

impl TeamQueryService {
    pub async fn list_members(
        &self,
        actor: &AuthenticatedUser,
        query: ListMembersQuery,
    ) -> ApplicationResult<Vec<TeamMemberDto>> {
        let team = team_in_actor_tenant(self.team_repo.as_ref(), actor, &query.team_slug).await?;
        let members = self.member_repo.list(team.id).await?;
        Ok(members.into_iter().map(TeamMemberDto::from).collect())
    }
}
