// src/application/commands/teams/mod.rs
mod add_member;
mod create;
mod remove_member;
mod service;

pub use add_member::AddMemberCommand;
pub use create::CreateTeamCommand;
pub use remove_member::RemoveMemberCommand;
pub use service::TeamCommandService;
