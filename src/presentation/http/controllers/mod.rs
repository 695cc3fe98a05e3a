// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod slugs;
pub mod teams;
pub mod tenants;
