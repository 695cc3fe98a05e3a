use crate::domain::tenant::{LogoUrl, Tenant, ThemeColor, ThemeMode, ThemePatch};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::validation::ValidationErrors;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TenantDto {
    pub slug: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Tenant> for TenantDto {
    fn from(tenant: Tenant) -> Self {
        Self {
            slug: tenant.slug.into(),
            name: tenant.name.to_string(),
            created_at: tenant.created_at,
        }
    }
}

/// Theme a client applies when rendering pages for a tenant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TenantThemeDto {
    pub tenant: String,
    pub name: String,
    pub mode: ThemeMode,
    pub primary_color: String,
    pub accent_color: String,
    pub logo_url: Option<String>,
}

impl From<Tenant> for TenantThemeDto {
    fn from(tenant: Tenant) -> Self {
        Self {
            tenant: tenant.slug.into(),
            name: tenant.name.to_string(),
            mode: tenant.theme.mode,
            primary_color: tenant.theme.primary_color.to_string(),
            accent_color: tenant.theme.accent_color.to_string(),
            logo_url: tenant.theme.logo_url.map(|url| url.as_str().to_string()),
        }
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateThemeRequest {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    /// `null` removes the logo.
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub logo_url: Option<Option<String>>,
}

impl UpdateThemeRequest {
    pub fn validate(&self) -> Result<ThemePatch, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut patch = ThemePatch::default();

        if let Some(mode) = self.mode.as_deref() {
            match mode.parse::<ThemeMode>() {
                Ok(mode) => patch.mode = Some(mode),
                Err(_) => errors.push("mode", "mode must be one of: light, dark, system"),
            }
        }

        for (field, value, slot) in [
            ("primary_color", &self.primary_color, &mut patch.primary_color),
            ("accent_color", &self.accent_color, &mut patch.accent_color),
        ] {
            if let Some(raw) = value {
                match ThemeColor::new(raw) {
                    Ok(color) => *slot = Some(color),
                    Err(_) => errors.push(field, format!("{field} must be a #rgb or #rrggbb color")),
                }
            }
        }

        match &self.logo_url {
            None => {}
            Some(None) => patch.logo_url = Some(None),
            Some(Some(raw)) => match LogoUrl::new(raw.clone()) {
                Ok(url) => patch.logo_url = Some(Some(url)),
                Err(_) => errors.push("logo_url", "logo_url must start with https:// or /"),
            },
        }

        if errors.is_empty() && patch.is_empty() {
            errors.push("theme", "at least one theme field must be provided");
        }

        errors.finish(|| patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> UpdateThemeRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn valid_fields_become_a_patch() {
        let patch = parse(r##"{"mode":"dark","primary_color":"#123"}"##)
            .validate()
            .unwrap();
        assert_eq!(patch.mode, Some(ThemeMode::Dark));
        assert_eq!(patch.primary_color.unwrap().as_str(), "#112233");
        assert!(patch.accent_color.is_none());
        assert!(patch.logo_url.is_none());
    }

    #[test]
    fn null_logo_clears_it_and_absent_logo_keeps_it() {
        let cleared = parse(r#"{"logo_url":null}"#).validate().unwrap();
        assert_eq!(cleared.logo_url, Some(None));

        let untouched = parse(r#"{"mode":"light"}"#).validate().unwrap();
        assert_eq!(untouched.logo_url, None);
    }

    #[test]
    fn invalid_fields_are_reported_together() {
        let errors = parse(r#"{"mode":"neon","accent_color":"blue","logo_url":"ftp://x"}"#)
            .validate()
            .unwrap_err();
        assert!(errors.has_field("mode"));
        assert!(errors.has_field("accent_color"));
        assert!(errors.has_field("logo_url"));
        assert!(!errors.has_field("primary_color"));
    }

    #[test]
    fn empty_update_is_rejected() {
        let errors = parse("{}").validate().unwrap_err();
        assert!(errors.has_field("theme"));
    }
}
