// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{teams::TeamCommandService, tenants::TenantCommandService},
        ports::{ClockPort, SlugGeneratorPort, TokenManagerPort},
        queries::{teams::TeamQueryService, tenants::TenantQueryService},
    },
    domain::{
        team::{TeamMemberRepository, TeamRepository, services::TeamSlugService},
        tenant::TenantRepository,
    },
};

pub struct ApplicationServices {
    pub team_commands: Arc<TeamCommandService>,
    pub team_queries: Arc<TeamQueryService>,
    pub tenant_commands: Arc<TenantCommandService>,
    pub tenant_queries: Arc<TenantQueryService>,
    token_manager: Arc<TokenManagerPort>,
    clock: Arc<ClockPort>,
    slugger: Arc<SlugGeneratorPort>,
}

impl ApplicationServices {
    pub fn new(
        tenant_repo: Arc<dyn TenantRepository>,
        team_repo: Arc<dyn TeamRepository>,
        member_repo: Arc<dyn TeamMemberRepository>,
        token_manager: Arc<TokenManagerPort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
    ) -> Self {
        let slug_service = Arc::new(TeamSlugService::new(
            Arc::clone(&team_repo),
            Arc::clone(&slugger),
        ));

        let team_commands = Arc::new(TeamCommandService::new(
            Arc::clone(&team_repo),
            Arc::clone(&member_repo),
            slug_service,
            Arc::clone(&clock),
        ));
        let team_queries = Arc::new(TeamQueryService::new(
            Arc::clone(&team_repo),
            Arc::clone(&member_repo),
        ));

        let tenant_commands = Arc::new(TenantCommandService::new(
            Arc::clone(&tenant_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let tenant_queries = Arc::new(TenantQueryService::new(Arc::clone(&tenant_repo)));

        Self {
            team_commands,
            team_queries,
            tenant_commands,
            tenant_queries,
            token_manager,
            clock,
            slugger,
        }
    }

    pub fn token_manager(&self) -> Arc<TokenManagerPort> {
        Arc::clone(&self.token_manager)
    }

    pub fn clock(&self) -> Arc<ClockPort> {
        Arc::clone(&self.clock)
    }

    /// Slug the configured generator would derive from `text`, without
    /// reserving it.
    pub fn preview_slug(&self, text: &str) -> String {
        self.slugger.slugify(text)
    }
}
