// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod time;
pub mod util;

pub use security::{
    ACME_ADMIN_ID, ACME_ADMIN_TOKEN, ALICE_ID, ALICE_TOKEN, BOB_ID, BOB_TOKEN, EXPIRED_TOKEN,
    GLOBEX_ADMIN_ID, GLOBEX_ADMIN_TOKEN, DummyTokenManager, user_for,
};
pub use time::fixed_now;
pub use util::DummyClock;
