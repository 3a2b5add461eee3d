//! Authentication ports.

use uuid::Uuid;

/// Claims carried by a session token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub email: String,
    pub exp: i64,
}

/// Token service trait for session token operations.
///
/// Tokens are stateless bearer credentials: minted at login, valid for a
/// fixed window, never revoked - expiry is the only invalidation path.
pub trait TokenService: Send + Sync {
    /// Mint a session token for a user.
    fn generate_token(&self, user_id: Uuid, email: &str) -> Result<String, AuthError>;

    /// Verify signature and expiry, returning the claims.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Lifetime of newly minted tokens, in seconds.
    fn expiration_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
///
/// `TokenExpired` and `InvalidToken` are distinct values for logging, but
/// the HTTP boundary must present them identically to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Malformed authorization header")]
    MalformedAuth,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
