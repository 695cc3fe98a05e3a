pub mod auth;
pub mod members;
pub mod teams;
pub mod tenants;
pub mod validation;

pub use auth::{AuthTokenDto, AuthenticatedUser, CapabilityView, CurrentUserDto, TokenSubject};
pub use members::{AddMemberRequest, ValidatedMember};
pub use teams::{TeamDto, TeamMemberDto};
pub use tenants::{TenantDto, TenantThemeDto, UpdateThemeRequest};
pub use validation::{FieldError, ValidationErrors};
