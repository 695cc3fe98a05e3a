use crate::domain::team::{MemberRole, Team, TeamMember};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: Uuid,
    pub tenant: String,
    pub name: String,
    pub slug: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Team> for TeamDto {
    fn from(team: Team) -> Self {
        Self {
            id: team.id.as_uuid(),
            tenant: team.tenant.into(),
            name: team.name.into(),
            slug: team.slug.into(),
            created_by: team.created_by.as_uuid(),
            created_at: team.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamMemberDto {
    pub user_id: Uuid,
    pub role: MemberRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<Uuid>,
    pub joined_at: DateTime<Utc>,
}

impl From<TeamMember> for TeamMemberDto {
    fn from(member: TeamMember) -> Self {
        Self {
            user_id: member.user_id.as_uuid(),
            role: member.role,
            added_by: member.added_by.map(|id| id.as_uuid()),
            joined_at: member.joined_at,
        }
    }
}
