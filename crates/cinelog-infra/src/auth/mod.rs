//! Authentication adapters: JWT session tokens and Argon2 hashing.

mod jwt;
mod password;

pub use jwt::{JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;
