// src/bin/issue_token.rs
//! Mint a bearer token for local testing.
//!
//! Usage: `issue_token <tenant-slug> <username> [admin|member] [user-uuid]`
use anyhow::{Context, Result, bail};
use std::{env, sync::Arc};
use teamhub::{
    application::{dto::TokenSubject, ports::security::TokenManager},
    config::AppConfig,
    domain::{
        tenant::TenantSlug,
        user::{TenantRole, UserId},
    },
    infrastructure::{security::HmacTokenManager, time::SystemClock},
};
use uuid::Uuid;

const USAGE: &str = "usage: issue_token <tenant-slug> <username> [admin|member] [user-uuid]";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (tenant, username) = match args.as_slice() {
        [tenant, username, ..] => (tenant, username),
        _ => bail!(USAGE),
    };
    let role = match args.get(2) {
        Some(raw) => raw.parse::<TenantRole>()?,
        None => TenantRole::default(),
    };
    let user_id = match args.get(3) {
        Some(raw) => UserId::parse(raw)?,
        None => UserId::new(Uuid::new_v4())?,
    };

    let config = AppConfig::from_env()?;
    let manager = HmacTokenManager::new(
        config.token_secret(),
        config.token_ttl(),
        Arc::new(SystemClock),
    )?;

    let subject = TokenSubject {
        user_id,
        username: username.clone(),
        tenant: TenantSlug::new(tenant.as_str()).context("invalid tenant slug")?,
        role,
    };
    let token = manager.issue(subject).await?;

    eprintln!("user {user_id} ({role}) in tenant {tenant}, expires {}", token.expires_at);
    println!("{}", token.token);
    Ok(())
}
