//! Application configuration loaded from environment variables.
//!
//! Configuration is read once at startup into an explicit object and
//! passed into the services; nothing reads the environment at call time.

use std::env;
use std::path::PathBuf;

use cinelog_infra::JwtConfig;
use cinelog_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Public base URL used to expand stored file references into
    /// absolute URLs.
    pub public_base_url: String,
    /// Directory where uploaded pictures are stored and served from.
    pub uploads_dir: PathBuf,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        let secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "change-me-in-production".to_string());

        // Warn if using default secret in production
        if secret == "change-me-in-production" {
            let is_production = env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default JWT secret in production! Set JWT_SECRET environment variable."
                );
            } else {
                tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
            }
        }

        let jwt = JwtConfig {
            secret,
            expiration_secs: env::var("JWT_EXPIRATION_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600),
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "cinelog-api".to_string()),
        };

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            public_base_url: env::var("BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{port}")),
            uploads_dir: env::var("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            database,
            jwt,
        }
    }
}
