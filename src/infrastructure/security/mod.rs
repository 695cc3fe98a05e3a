pub mod claims;
pub mod token;

pub use token::HmacTokenManager;
