//! JWT session token service.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cinelog_core::ports::{AuthError, TokenClaims, TokenService};

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Session lifetime in seconds. Expiry is the only invalidation path.
    pub expiration_secs: i64,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            expiration_secs: 3600,
            issuer: "cinelog-api".to_string(),
        }
    }
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // user_id
    email: String,
    exp: i64,    // expiration timestamp
    iat: i64,    // issued at
    iss: String, // issuer
}

/// JWT-based session token service.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);
        // No clock leeway: a token is rejected the second its window ends.
        validation.leeway = 0;
        validation
    }
}

impl TokenService for JwtTokenService {
    fn generate_token(&self, user_id: Uuid, email: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::seconds(self.config.expiration_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation()).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken(e.to_string()),
                }
            })?;

        let user_id = Uuid::parse_str(&token_data.claims.sub)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(TokenClaims {
            user_id,
            email: token_data.claims.email,
            exp: token_data.claims.exp,
        })
    }

    fn expiration_seconds(&self) -> i64 {
        self.config.expiration_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_secs: 3600,
            issuer: "test-issuer".to_string(),
        }
    }

    /// Encode claims as if the token had been minted `age_secs` ago.
    fn backdated_token(service: &JwtTokenService, config: &JwtConfig, age_secs: i64) -> String {
        let iat = Utc::now().timestamp() - age_secs;
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            exp: iat + config.expiration_secs,
            iat,
            iss: config.issuer.clone(),
        };
        encode(&Header::default(), &claims, &service.encoding_key).unwrap()
    }

    #[test]
    fn generate_and_validate_roundtrip() {
        let service = JwtTokenService::new(test_config());
        let user_id = Uuid::new_v4();
        let email = "test@example.com";

        let token = service.generate_token(user_id, email).unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.email, email);
    }

    #[test]
    fn garbage_token_is_invalid() {
        let service = JwtTokenService::new(test_config());

        let result = service.validate_token("invalid-token");

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let service1 = JwtTokenService::new(JwtConfig {
            secret: "same-secret".to_string(),
            expiration_secs: 3600,
            issuer: "issuer1".to_string(),
        });
        let service2 = JwtTokenService::new(JwtConfig {
            secret: "same-secret".to_string(),
            expiration_secs: 3600,
            issuer: "issuer2".to_string(),
        });

        let token = service1
            .generate_token(Uuid::new_v4(), "test@test.com")
            .unwrap();

        assert!(service2.validate_token(&token).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let service1 = JwtTokenService::new(test_config());
        let service2 = JwtTokenService::new(JwtConfig {
            secret: "other-secret".to_string(),
            ..test_config()
        });

        let token = service1
            .generate_token(Uuid::new_v4(), "test@test.com")
            .unwrap();

        assert!(service2.validate_token(&token).is_err());
    }

    #[test]
    fn token_valid_just_inside_window() {
        let config = test_config();
        let service = JwtTokenService::new(config.clone());

        // Minted 59 minutes ago with a 1-hour lifetime: still valid.
        let token = backdated_token(&service, &config, 59 * 60);
        assert!(service.validate_token(&token).is_ok());
    }

    #[test]
    fn token_rejected_past_window() {
        let config = test_config();
        let service = JwtTokenService::new(config.clone());

        // Minted 61 minutes ago with a 1-hour lifetime: expired.
        let token = backdated_token(&service, &config, 61 * 60);
        assert!(matches!(
            service.validate_token(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn expiration_seconds_reports_config() {
        let service = JwtTokenService::new(test_config());
        assert_eq!(service.expiration_seconds(), 3600);
    }
}
