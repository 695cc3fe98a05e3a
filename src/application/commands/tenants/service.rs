use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::SlugGenerator},
    domain::tenant::TenantRepository,
};

pub struct TenantCommandService {
    pub(super) tenant_repo: Arc<dyn TenantRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TenantCommandService {
    pub fn new(
        tenant_repo: Arc<dyn TenantRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tenant_repo,
            slugger,
            clock,
        }
    }
}
