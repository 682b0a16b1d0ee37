// Opaque session token generation and bearer header parsing

use rand::{rngs::OsRng, RngCore};

use crate::auth::error::AuthError;

/// Random bytes per token before hex encoding
pub const TOKEN_BYTES: usize = 32;

/// Length of an encoded token (64 hex chars)
pub const TOKEN_LEN: usize = TOKEN_BYTES * 2;

/// Authorization scheme prefix, including the separating space
pub const BEARER_PREFIX: &str = "Bearer ";

/// Token service for session token operations
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenService;

impl TokenService {
    /// Generate a new session token from the OS random source.
    ///
    /// Uniqueness is enforced by the `tokens.token` unique constraint, not here.
    pub fn generate_token() -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Extract the token from an `Authorization` header value.
    ///
    /// Accepts exactly `Bearer ` followed by 64 hex characters
    /// (71 characters in total).
    pub fn parse_bearer(header: Option<&str>) -> Result<&str, AuthError> {
        let token = header
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .ok_or(AuthError::InvalidToken)?;

        if Self::is_well_formed(token) {
            Ok(token)
        } else {
            Err(AuthError::InvalidToken)
        }
    }

    /// True if the string has the shape of a generated token
    pub fn is_well_formed(token: &str) -> bool {
        token.len() == TOKEN_LEN && token.bytes().all(|b| b.is_ascii_hexdigit())
    }
}
