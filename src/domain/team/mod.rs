pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewTeam, NewTeamMember, Team, TeamMember};
pub use repository::{TeamMemberRepository, TeamRepository};
pub use value_objects::{MemberRole, TeamId, TeamName, TeamSlug};
