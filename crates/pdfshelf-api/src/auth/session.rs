//! Session token derivation and verification.
//!
//! There is no server-side session store. The session cookie carries a token derived
//! from the configured login password, so rotating the password invalidates every
//! outstanding session.

use axum_extra::extract::cookie::{Cookie, SameSite};
use hmac::{Hmac, Mac};
use pdfshelf_core::constants::SESSION_COOKIE_NAME;
use pdfshelf_core::{AppError, Config};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

const SESSION_CONTEXT: &[u8] = b"pdfshelf-session-v1";

#[derive(Clone)]
pub struct SessionAuth {
    token: String,
    ttl_secs: u64,
    secure_cookie: bool,
}

impl std::fmt::Debug for SessionAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuth")
            .field("ttl_secs", &self.ttl_secs)
            .field("secure_cookie", &self.secure_cookie)
            .finish_non_exhaustive()
    }
}

fn derive_token(password: &str) -> Result<String, AppError> {
    let mut mac = HmacSha256::new_from_slice(password.as_bytes())
        .map_err(|e| AppError::Internal(format!("Failed to initialize HMAC: {}", e)))?;
    mac.update(SESSION_CONTEXT);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

impl SessionAuth {
    pub fn new(password: &str, ttl_secs: u64, secure_cookie: bool) -> Result<Self, AppError> {
        if password.is_empty() {
            return Err(AppError::Configuration(
                "LOGIN_PASSWORD must not be empty".to_string(),
            ));
        }

        Ok(Self {
            token: derive_token(password)?,
            ttl_secs,
            secure_cookie,
        })
    }

    /// Build from configuration. Cookies are marked `Secure` in production.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            config.login_password(),
            config.session_ttl_secs(),
            config.is_production(),
        )
    }

    /// Check a submitted password.
    ///
    /// Compares derived tokens rather than raw passwords so the comparison runs over
    /// equal-length inputs.
    pub fn verify_password(&self, candidate: &str) -> bool {
        match derive_token(candidate) {
            Ok(candidate_token) => secure_compare(&candidate_token, &self.token),
            Err(_) => false,
        }
    }

    /// Check the value of the session cookie. A missing cookie is never valid.
    pub fn is_valid_session(&self, cookie_value: Option<&str>) -> bool {
        cookie_value.is_some_and(|value| secure_compare(value, &self.token))
    }

    pub fn session_token(&self) -> &str {
        &self.token
    }

    /// Cookie issued after a successful login.
    pub fn session_cookie(&self) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE_NAME, self.token.clone()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.secure_cookie)
            .max_age(time::Duration::seconds(
                i64::try_from(self.ttl_secs).unwrap_or(i64::MAX),
            ))
            .build()
    }

    /// Cookie that clears the session in the browser.
    pub fn removal_cookie() -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE_NAME, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .max_age(time::Duration::ZERO)
            .build()
    }
}
