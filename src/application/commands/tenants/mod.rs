mod provision;
mod service;
mod update_theme;

pub use provision::ProvisionTenantCommand;
pub use service::TenantCommandService;
pub use update_theme::UpdateThemeCommand;
