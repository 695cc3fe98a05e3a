// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

use crate::infrastructure::security::token::MIN_SECRET_LEN;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    token_secret: String,
    token_ttl: Duration,
    allowed_origins: Vec<String>,
    seed_tenants: Vec<String>,
    slug_transliterate: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_token_ttl() -> u64 {
    3600
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn default_seed_tenants() -> Vec<String> {
    vec!["Acme".into()]
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl AppConfig {
    /// Build configuration from environment variables, after loading a
    /// `.env` file when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Optional values fall
    /// back to defaults; `TOKEN_SECRET` is required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let token_secret = lookup("TOKEN_SECRET").ok_or(ConfigError::Missing("TOKEN_SECRET"))?;
        if token_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid(format!(
                "TOKEN_SECRET must be at least {MIN_SECRET_LEN} bytes"
            )));
        }

        let token_ttl_secs = match lookup("TOKEN_TTL_SECONDS") {
            None => default_token_ttl(),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "TOKEN_TTL_SECONDS must be a positive integer, got '{raw}'"
                    )));
                }
            },
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| split_list(&s))
            .unwrap_or_else(default_allowed_origins);

        let seed_tenants = lookup("SEED_TENANTS")
            .map(|s| split_list(&s))
            .unwrap_or_else(default_seed_tenants);

        let slug_transliterate = lookup("SLUG_TRANSLITERATE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            token_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
            allowed_origins,
            seed_tenants,
            slug_transliterate,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn token_secret(&self) -> &str {
        &self.token_secret
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Display names of tenants provisioned at startup.
    pub fn seed_tenants(&self) -> &[String] {
        &self.seed_tenants
    }

    /// Whether slugs transliterate non-Latin scripts instead of dropping them.
    pub fn slug_transliterate(&self) -> bool {
        self.slug_transliterate
    }
}
