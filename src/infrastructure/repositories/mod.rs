// src/infrastructure/repositories/mod.rs
mod memory_team;
mod memory_tenant;

pub use memory_team::{InMemoryTeamMemberRepository, InMemoryTeamRepository};
pub use memory_tenant::InMemoryTenantRepository;
