// src/domain/tenant/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

pub const MAX_SLUG_LEN: usize = 96;
const MAX_TENANT_NAME_LEN: usize = 120;

/// Shared rule for every slug stored in the domain.
pub(crate) fn ensure_slug(value: &str, label: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{label} cannot be empty")));
    }
    if value.len() > MAX_SLUG_LEN {
        return Err(DomainError::Validation(format!(
            "{label} must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    if !value
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(DomainError::Validation(format!(
            "{label} may only contain lowercase letters, digits and hyphens"
        )));
    }
    Ok(())
}

/// Shorten a slug to at most `max_len` bytes.
///
/// The cut prefers the last hyphen when it keeps at least half of the budget,
/// and trailing hyphens are dropped. A non-empty slug without leading hyphens
/// stays non-empty as long as `max_len > 0`.
pub(crate) fn truncate_slug(value: &str, max_len: usize) -> &str {
    if value.len() <= max_len {
        return value;
    }
    let mut end = max_len;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    let head = &value[..end];
    let head = match head.rfind('-') {
        Some(cut) if cut >= max_len / 2 && !value[end..].starts_with('-') => &head[..cut],
        _ => head,
    };
    head.trim_end_matches('-')
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantSlug(String);

impl TenantSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        ensure_slug(&value, "tenant slug")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TenantSlug> for String {
    fn from(value: TenantSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantName(String);

impl TenantName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation("tenant name cannot be empty"));
        }
        if value.chars().count() > MAX_TENANT_NAME_LEN {
            return Err(DomainError::Validation(format!(
                "tenant name must be at most {MAX_TENANT_NAME_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `#rrggbb` color. Short `#rgb` input is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeColor(String);

impl ThemeColor {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let raw = value.as_ref().trim();
        let hex = raw
            .strip_prefix('#')
            .ok_or_else(|| DomainError::validation("color must start with '#'"))?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DomainError::validation("color must be hexadecimal"));
        }
        let expanded = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => hex.to_string(),
            _ => {
                return Err(DomainError::validation(
                    "color must have 3 or 6 hex digits",
                ));
            }
        };
        Ok(Self(format!("#{}", expanded.to_ascii_lowercase())))
    }

    /// Wrap a color known to be in canonical `#rrggbb` form.
    pub(crate) fn from_canonical(value: &str) -> Self {
        debug_assert!(Self::new(value).is_ok_and(|c| c.0 == value));
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(DomainError::Validation(format!("unknown theme mode '{other}'"))),
        }
    }
}

/// Logo location: an absolute `https://` URL or a site-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogoUrl(String);

impl LogoUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        let relative = value.starts_with('/') && !value.starts_with("//");
        if !(value.starts_with("https://") || relative) {
            return Err(DomainError::validation(
                "logo url must start with https:// or /",
            ));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::validation("logo url cannot contain whitespace"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
