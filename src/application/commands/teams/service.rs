// src/application/commands/teams/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::team::{TeamMemberRepository, TeamRepository, services::TeamSlugService},
};

pub struct TeamCommandService {
    pub(super) team_repo: Arc<dyn TeamRepository>,
    pub(super) member_repo: Arc<dyn TeamMemberRepository>,
    pub(super) slug_service: Arc<TeamSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TeamCommandService {
    pub fn new(
        team_repo: Arc<dyn TeamRepository>,
        member_repo: Arc<dyn TeamMemberRepository>,
        slug_service: Arc<TeamSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            team_repo,
            member_repo,
            slug_service,
            clock,
        }
    }
}
