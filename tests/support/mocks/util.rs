// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, Default)]
pub struct DummyClock;

impl teamhub::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}
