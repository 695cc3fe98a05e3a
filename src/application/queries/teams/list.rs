use super::TeamQueryService;
use crate::application::{
    ApplicationResult,
    dto::{AuthenticatedUser, TeamDto},
};

impl TeamQueryService {
    /// Teams of the actor's tenant, oldest first.
    pub async fn list_teams(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<TeamDto>> {
        let mut teams = self.team_repo.list_by_tenant(&actor.tenant).await?;
        teams.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.as_str().cmp(b.name.as_str()))
        });
        Ok(teams.into_iter().map(TeamDto::from).collect())
    }
}
