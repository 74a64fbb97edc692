use crate::api::config::Config;
use crate::data::models::role::{ADMIN_ROLE, MEMBER_ROLE};
use crate::security::errors::AuthError;
use serde::{Deserialize, Serialize};

pub struct JwtService {
    secret: String,
    expiration_minutes: u64,
}

impl JwtService {
    pub fn new(secret: impl Into<String>, expiration_minutes: u64) -> Self {
        JwtService {
            secret: secret.into(),
            expiration_minutes,
        }
    }

    /// Uses the secret and lifetime from the process configuration.
    pub fn from_config() -> Result<Self, AuthError> {
        let config = Config::get().map_err(|e| AuthError::Misconfigured(e.to_string()))?;
        Ok(JwtService::new(config.jwt_secret.clone(), config.jwt_expiration_minutes))
    }

    pub fn generate_token(&self, user_id: i32, roles: Vec<String>) -> Result<String, AuthError> {
        let curr_time = chrono::Utc::now().timestamp() as usize;

        let claims = AccessClaims {
            sub: user_id,
            iat: curr_time,
            exp: curr_time + (self.expiration_minutes * 60) as usize,
            roles,
        };

        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|_| AuthError::TokenCreationError)?;

        tracing::info!("Token generated for user {}", user_id);

        Ok(token)
    }

    pub fn decode_token<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, AuthError> {
        let validation = jsonwebtoken::Validation::default();

        let token_data = jsonwebtoken::decode::<T>(
            token,
            &jsonwebtoken::DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Ok(token_data.claims)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: i32,
    /// Issued at (as UTC timestamp)
    pub iat: usize,
    /// Expiration time (as UTC timestamp)
    pub exp: usize,
    /// Names of the roles assigned to the user
    #[serde(default)]
    pub roles: Vec<String>,
}

impl AccessClaims {
    pub fn user_id(&self) -> i32 {
        self.sub
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_member(&self) -> bool {
        self.has_role(MEMBER_ROLE)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_decodes_to_same_claims() {
        let service = JwtService::new("test-secret", 30);

        let token = service
            .generate_token(42, vec![MEMBER_ROLE.to_string()])
            .unwrap();
        let claims: AccessClaims = service.decode_token(&token).unwrap();

        assert_eq!(claims.user_id(), 42);
        assert!(claims.is_member());
        assert!(!claims.is_admin());
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = JwtService::new("one", 5).generate_token(1, Vec::new()).unwrap();

        let result = JwtService::new("two", 5).decode_token::<AccessClaims>(&token);

        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);
    }
}
