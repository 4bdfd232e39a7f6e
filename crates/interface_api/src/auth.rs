//! Session tokens
//!
//! A signed-in session is a JWT carrying the email as subject and the
//! session role. Logging out records the token's `jti` in [`RevokedTokens`].

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain_party::SessionUser;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (email address)
    pub sub: String,
    /// Session role, e.g. `admin` or `user`
    pub role: String,
    /// Token id, used for revocation
    pub jti: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    pub fn session_user(&self) -> SessionUser {
        SessionUser::new(self.sub.clone(), self.role.clone())
    }

    pub fn is_admin(&self) -> bool {
        self.session_user().is_admin()
    }
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Token revoked")]
    TokenRevoked,
    #[error("Could not sign token: {0}")]
    Signing(String),
}

/// Creates a signed token for `user`
///
/// # Arguments
///
/// * `user` - The signed-in user
/// * `secret` - JWT secret key
/// * `expiration_secs` - Token validity in seconds
pub fn create_token(user: &SessionUser, secret: &str, expiration_secs: u64) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = i64::try_from(expiration_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|validity| now.checked_add_signed(validity))
        .ok_or_else(|| AuthError::Signing(format!("token lifetime of {}s is out of range", expiration_secs)))?;

    let claims = Claims {
        sub: user.email.clone(),
        role: user.role.clone(),
        jti: Uuid::new_v4().to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Signing(e.to_string()))
}

/// Validates a token's signature and expiry
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

/// Ids of tokens that were logged out before they expired, with their expiry
///
/// Entries past their expiry are dropped on the next revocation; the token
/// would fail validation anyway.
#[derive(Debug, Clone, Default)]
pub struct RevokedTokens(Arc<RwLock<HashMap<String, i64>>>);

impl RevokedTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn revoke(&self, jti: &str, exp: i64) {
        let now = Utc::now().timestamp();
        let mut revoked = self.0.write().await;
        revoked.retain(|_, expires| *expires > now);
        revoked.insert(jti.to_string(), exp);
    }

    pub async fn is_revoked(&self, jti: &str) -> bool {
        self.0.read().await.contains_key(jti)
    }

    pub async fn count(&self) -> usize {
        self.0.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_token_round_trip_keeps_session() {
        let user = SessionUser::new("admin@vetinsure.com", "admin");
        let token = create_token(&user, SECRET, 60).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();
        assert_eq!(claims.session_user(), user);
        assert!(claims.is_admin());
    }

    #[test]
    fn test_each_token_gets_its_own_id() {
        let user = SessionUser::new("john.smith@email.com", "user");
        let a = validate_token(&create_token(&user, SECRET, 60).unwrap(), SECRET).unwrap();
        let b = validate_token(&create_token(&user, SECRET, 60).unwrap(), SECRET).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let user = SessionUser::new("john.smith@email.com", "user");
        let token = create_token(&user, SECRET, 60).unwrap();
        assert!(matches!(validate_token(&token, "other"), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_out_of_range_lifetime_rejected() {
        let user = SessionUser::new("john.smith@email.com", "user");
        assert!(matches!(create_token(&user, SECRET, u64::MAX), Err(AuthError::Signing(_))));
        assert!(matches!(
            create_token(&user, SECRET, i64::MAX as u64),
            Err(AuthError::Signing(_))
        ));
    }

    #[tokio::test]
    async fn test_revocation() {
        let revoked = RevokedTokens::new();
        let exp = Utc::now().timestamp() + 3600;
        assert!(!revoked.is_revoked("abc").await);
        revoked.revoke("abc", exp).await;
        assert!(revoked.clone().is_revoked("abc").await);
    }

    #[tokio::test]
    async fn test_expired_revocations_are_dropped() {
        let revoked = RevokedTokens::new();
        let now = Utc::now().timestamp();
        revoked.revoke("old", now - 60).await;
        revoked.revoke("live", now + 3600).await;

        assert!(!revoked.is_revoked("old").await);
        assert!(revoked.is_revoked("live").await);
        assert_eq!(revoked.count().await, 1);
    }
}
