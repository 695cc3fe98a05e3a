pub mod teams;
pub mod tenants;
