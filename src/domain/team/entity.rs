// src/domain/team/entity.rs
use crate::domain::team::value_objects::{MemberRole, TeamId, TeamName, TeamSlug};
use crate::domain::tenant::TenantSlug;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Team {
    pub id: TeamId,
    pub tenant: TenantSlug,
    pub name: TeamName,
    pub slug: TeamSlug,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTeam {
    pub tenant: TenantSlug,
    pub name: TeamName,
    pub slug: TeamSlug,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewTeam {
    pub fn into_team(self, id: TeamId) -> Team {
        Team {
            id,
            tenant: self.tenant,
            name: self.name,
            slug: self.slug,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub team_id: TeamId,
    pub user_id: UserId,
    pub role: MemberRole,
    pub added_by: Option<UserId>,
    pub joined_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn is_owner(&self) -> bool {
        self.role == MemberRole::Owner
    }
}

#[derive(Debug, Clone)]
pub struct NewTeamMember {
    pub team_id: TeamId,
    pub user_id: UserId,
    pub role: MemberRole,
    pub added_by: Option<UserId>,
    pub joined_at: DateTime<Utc>,
}

impl From<NewTeamMember> for TeamMember {
    fn from(value: NewTeamMember) -> Self {
        Self {
            team_id: value.team_id,
            user_id: value.user_id,
            role: value.role,
            added_by: value.added_by,
            joined_at: value.joined_at,
        }
    }
}
