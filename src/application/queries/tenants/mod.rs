mod service;

pub use service::{GetTenantThemeQuery, TenantQueryService};
