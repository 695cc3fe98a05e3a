pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTenant, Tenant, TenantTheme, ThemePatch};
pub use repository::TenantRepository;
pub use value_objects::{LogoUrl, TenantName, TenantSlug, ThemeColor, ThemeMode};
