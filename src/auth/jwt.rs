//! # JWT Token Management
//!
//! Bearer token issuance and validation (HS256).
//!
//! Validation is stateless: no lookup beyond the signing secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::credentials::Principal;
use super::errors::{AuthError, AuthResult};

/// JWT claims carried by access tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    pub role: String,

    /// Issued at (Unix epoch seconds)
    pub iat: i64,

    /// Expiration (Unix epoch seconds)
    pub exp: i64,

    pub iss: String,

    pub aud: String,

    /// Unique token id
    pub jti: String,
}

impl Claims {
    pub fn principal(&self) -> Principal {
        Principal {
            username: self.sub.clone(),
            role: self.role.clone(),
        }
    }
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing
    pub secret: String,

    /// Access token lifetime
    pub token_ttl: Duration,

    pub issuer: String,

    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "CHANGE_THIS_SECRET_IN_PRODUCTION".to_string(),
            token_ttl: Duration::hours(24),
            issuer: "realtydash".to_string(),
            audience: "realtydash".to_string(),
        }
    }
}

/// A freshly signed token
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: i64,
}

/// Signs and verifies access tokens
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Sign a token for an authenticated principal
    pub fn issue(&self, principal: &Principal) -> AuthResult<IssuedToken> {
        let now = Utc::now();
        let exp = now + self.config.token_ttl;

        let claims = Claims {
            sub: principal.username.clone(),
            role: principal.role.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenGenerationFailed)?;

        Ok(IssuedToken {
            token,
            expires_at: exp.timestamp(),
        })
    }

    /// Verify signature, expiry, issuer, and audience
    pub fn validate(&self, token: &str) -> AuthResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        Ok(data.claims)
    }
}

impl std::fmt::Debug for JwtManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtManager")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_manager() -> JwtManager {
        JwtManager::new(JwtConfig {
            secret: "test_secret_key_for_testing_only".to_string(),
            token_ttl: Duration::hours(24),
            issuer: "test".to_string(),
            audience: "test".to_string(),
        })
    }

    fn admin() -> Principal {
        Principal {
            username: "admin".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn test_token_generation() {
        let manager = create_test_manager();
        let issued = manager.issue(&admin()).unwrap();

        assert_eq!(issued.token.split('.').count(), 3);
        assert!(issued.expires_at > Utc::now().timestamp());
    }

    #[test]
    fn test_token_validation() {
        let manager = create_test_manager();
        let issued = manager.issue(&admin()).unwrap();

        let claims = manager.validate(&issued.token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.principal(), admin());
    }

    #[test]
    fn test_invalid_token_rejected() {
        let manager = create_test_manager();
        assert_eq!(
            manager.validate("invalid.token.here"),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let manager1 = JwtManager::new(JwtConfig {
            secret: "secret_one".to_string(),
            ..JwtConfig::default()
        });
        let manager2 = JwtManager::new(JwtConfig {
            secret: "secret_two".to_string(),
            ..JwtConfig::default()
        });

        let issued = manager1.issue(&admin()).unwrap();
        assert_eq!(manager2.validate(&issued.token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let manager1 = create_test_manager();
        let manager2 = JwtManager::new(JwtConfig {
            secret: "test_secret_key_for_testing_only".to_string(),
            audience: "someone-else".to_string(),
            ..JwtConfig::default()
        });

        let issued = manager1.issue(&admin()).unwrap();
        assert_eq!(manager2.validate(&issued.token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_expired_token_rejected() {
        let secret = "test_secret";
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());

        let now = Utc::now();
        let claims = Claims {
            sub: "admin".to_string(),
            role: "admin".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
            iss: "test".to_string(),
            aud: "test".to_string(),
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(&Header::default(), &claims, &encoding_key).unwrap();

        let manager = JwtManager::new(JwtConfig {
            secret: secret.to_string(),
            token_ttl: Duration::hours(24),
            issuer: "test".to_string(),
            audience: "test".to_string(),
        });

        assert_eq!(manager.validate(&token), Err(AuthError::TokenExpired));
    }

    #[test]
    fn test_tokens_are_unique() {
        let manager = create_test_manager();
        let a = manager.issue(&admin()).unwrap();
        let b = manager.issue(&admin()).unwrap();
        assert_ne!(a.token, b.token);
    }
}
