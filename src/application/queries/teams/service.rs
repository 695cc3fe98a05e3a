use std::sync::Arc;

use crate::domain::team::{TeamMemberRepository, TeamRepository};

pub struct TeamQueryService {
    pub(super) team_repo: Arc<dyn TeamRepository>,
    pub(super) member_repo: Arc<dyn TeamMemberRepository>,
}

impl TeamQueryService {
    pub fn new(team_repo: Arc<dyn TeamRepository>, member_repo: Arc<dyn TeamMemberRepository>) -> Self {
        Self {
            team_repo,
            member_repo,
        }
    }
}
