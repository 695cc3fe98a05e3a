mod get_by_slug;
mod list;
mod members;
mod service;

pub use get_by_slug::GetTeamQuery;
pub use members::ListMembersQuery;
pub use service::TeamQueryService;
