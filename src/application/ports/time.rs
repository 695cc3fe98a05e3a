// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" so timestamps and token expiry are testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
