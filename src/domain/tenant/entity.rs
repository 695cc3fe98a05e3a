// src/domain/tenant/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::tenant::value_objects::{LogoUrl, TenantName, TenantSlug, ThemeColor, ThemeMode};
use chrono::{DateTime, Utc};

const DEFAULT_PRIMARY: &str = "#4f46e5";
const DEFAULT_ACCENT: &str = "#0ea5e9";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantTheme {
    pub mode: ThemeMode,
    pub primary_color: ThemeColor,
    pub accent_color: ThemeColor,
    pub logo_url: Option<LogoUrl>,
}

impl TenantTheme {
    pub fn apply(&mut self, patch: ThemePatch) {
        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
        if let Some(primary) = patch.primary_color {
            self.primary_color = primary;
        }
        if let Some(accent) = patch.accent_color {
            self.accent_color = accent;
        }
        if let Some(logo) = patch.logo_url {
            self.logo_url = logo;
        }
    }
}

impl Default for TenantTheme {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            primary_color: ThemeColor::from_canonical(DEFAULT_PRIMARY),
            accent_color: ThemeColor::from_canonical(DEFAULT_ACCENT),
            logo_url: None,
        }
    }
}

/// Partial theme update. `logo_url: Some(None)` clears the logo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePatch {
    pub mode: Option<ThemeMode>,
    pub primary_color: Option<ThemeColor>,
    pub accent_color: Option<ThemeColor>,
    pub logo_url: Option<Option<LogoUrl>>,
}

impl ThemePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct Tenant {
    pub slug: TenantSlug,
    pub name: TenantName,
    pub theme: TenantTheme,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTenant {
    pub slug: TenantSlug,
    pub name: TenantName,
    pub theme: TenantTheme,
    pub created_at: DateTime<Utc>,
}

impl NewTenant {
    pub fn new(slug: TenantSlug, name: TenantName, created_at: DateTime<Utc>) -> DomainResult<Self> {
        Ok(Self {
            slug,
            name,
            theme: TenantTheme::default(),
            created_at,
        })
    }
}

impl From<NewTenant> for Tenant {
    fn from(value: NewTenant) -> Self {
        Self {
            slug: value.slug,
            name: value.name,
            theme: value.theme,
            created_at: value.created_at,
        }
    }
}
