// src/infrastructure/repositories/memory_team.rs
use crate::domain::{
    errors::{DomainError, DomainResult},
    team::{
        NewTeam, NewTeamMember, Team, TeamId, TeamMember, TeamMemberRepository, TeamRepository,
        TeamSlug,
    },
    tenant::TenantSlug,
    user::UserId,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<Vec<Team>>,
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn insert(&self, team: NewTeam) -> DomainResult<Team> {
        let mut teams = self.teams.write().await;
        if teams
            .iter()
            .any(|t| t.tenant == team.tenant && t.slug == team.slug)
        {
            return Err(DomainError::Conflict(format!(
                "team slug '{}' already exists",
                team.slug
            )));
        }
        let team = team.into_team(TeamId::generate());
        teams.push(team.clone());
        Ok(team)
    }

    async fn find_by_slug(&self, tenant: &TenantSlug, slug: &TeamSlug) -> DomainResult<Option<Team>> {
        let teams = self.teams.read().await;
        Ok(teams
            .iter()
            .find(|t| &t.tenant == tenant && &t.slug == slug)
            .cloned())
    }

    async fn list_by_tenant(&self, tenant: &TenantSlug) -> DomainResult<Vec<Team>> {
        let teams = self.teams.read().await;
        Ok(teams.iter().filter(|t| &t.tenant == tenant).cloned().collect())
    }
}

#[derive(Default)]
pub struct InMemoryTeamMemberRepository {
    members: RwLock<HashMap<TeamId, Vec<TeamMember>>>,
}

#[async_trait]
impl TeamMemberRepository for InMemoryTeamMemberRepository {
    async fn add(&self, member: NewTeamMember) -> DomainResult<TeamMember> {
        let mut members = self.members.write().await;
        let roster = members.entry(member.team_id).or_default();
        if roster.iter().any(|m| m.user_id == member.user_id) {
            return Err(DomainError::Conflict(format!(
                "user {} is already a member",
                member.user_id
            )));
        }
        let member = TeamMember::from(member);
        roster.push(member.clone());
        Ok(member)
    }

    async fn find(&self, team: TeamId, user: UserId) -> DomainResult<Option<TeamMember>> {
        let members = self.members.read().await;
        Ok(members
            .get(&team)
            .and_then(|roster| roster.iter().find(|m| m.user_id == user))
            .cloned())
    }

    async fn list(&self, team: TeamId) -> DomainResult<Vec<TeamMember>> {
        let members = self.members.read().await;
        Ok(members.get(&team).cloned().unwrap_or_default())
    }

    async fn remove(&self, team: TeamId, user: UserId) -> DomainResult<TeamMember> {
        let mut members = self.members.write().await;
        let roster = members
            .get_mut(&team)
            .ok_or_else(|| DomainError::not_found(format!("user {user} is not a member")))?;
        let index = roster
            .iter()
            .position(|m| m.user_id == user)
            .ok_or_else(|| DomainError::not_found(format!("user {user} is not a member")))?;

        let owners = roster.iter().filter(|m| m.is_owner()).count();
        if roster[index].is_owner() && owners == 1 {
            return Err(DomainError::conflict("team must keep at least one owner"));
        }
        Ok(roster.remove(index))
    }
}
