// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Duration as ChronoDuration;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::{sync::Arc, time::Duration};

use super::claims::TokenClaims;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_VERSION: &str = "v1";
pub const MIN_SECRET_LEN: usize = 32;
/// Tolerated clock skew for tokens minted by another instance.
const ISSUED_AT_LEEWAY_SECS: i64 = 60;

/// Issues and verifies `v1.<claims>.<signature>` tokens signed with HMAC-SHA256.
#[derive(Clone)]
pub struct HmacTokenManager {
    secret: Arc<[u8]>,
    ttl: ChronoDuration,
    clock: Arc<dyn Clock>,
}

impl HmacTokenManager {
    pub fn new(secret: &str, ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "token secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        let ttl = ChronoDuration::from_std(ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self {
            secret: Arc::from(secret.as_bytes()),
            ttl,
            clock,
        })
    }

    fn mac(&self) -> ApplicationResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    fn sign(&self, signing_input: &str) -> ApplicationResult<String> {
        let mut mac = self.mac()?;
        mac.update(signing_input.as_bytes());
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }

    fn verify(&self, token: &str) -> ApplicationResult<TokenClaims> {
        let malformed = || ApplicationError::unauthorized("malformed token");

        let mut parts = token.split('.');
        let (Some(version), Some(payload), Some(signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        if version != TOKEN_VERSION {
            return Err(ApplicationError::unauthorized("unsupported token version"));
        }

        let signature = URL_SAFE_NO_PAD.decode(signature).map_err(|_| malformed())?;
        let mut mac = self.mac()?;
        mac.update(format!("{version}.{payload}").as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| ApplicationError::unauthorized("invalid token signature"))?;

        let payload = URL_SAFE_NO_PAD.decode(payload).map_err(|_| malformed())?;
        serde_json::from_slice(&payload).map_err(|_| malformed())
    }
}

#[async_trait]
impl TokenManager for HmacTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + self.ttl;
        let claims = TokenClaims::for_subject(&subject, issued_at, expires_at);

        let json = serde_json::to_vec(&claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let signing_input = format!("{TOKEN_VERSION}.{}", URL_SAFE_NO_PAD.encode(json));
        let signature = self.sign(&signing_input)?;

        Ok(AuthTokenDto {
            token: format!("{signing_input}.{signature}"),
            issued_at,
            expires_at,
            expires_in: self.ttl.num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let claims = self.verify(token)?;
        let now = self.clock.now().timestamp();

        if claims.exp <= now {
            return Err(ApplicationError::unauthorized("token expired"));
        }
        if claims.iat > now + ISSUED_AT_LEEWAY_SECS {
            return Err(ApplicationError::unauthorized("token issued in the future"));
        }

        claims.into_authenticated_user()
    }
}
