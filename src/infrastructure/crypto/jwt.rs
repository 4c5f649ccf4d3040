use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::ports::token_issuer::TokenIssuer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(thiserror::Error, Debug)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// HS256 tokens signed with a process-wide shared secret.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    pub fn issue_at(
        &self,
        user_id: i64,
        username: &str,
        issued_at: i64,
    ) -> anyhow::Result<String> {
        let exp = issued_at
            .checked_add(self.ttl_secs)
            .ok_or_else(|| anyhow::anyhow!("token expiry overflows: ttl {}s", self.ttl_secs))?;
        let claims = TokenClaims {
            user_id,
            username: username.to_string(),
            iat: issued_at,
            exp,
        };
        let token =
            jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(token)
    }

    /// Nothing in the HTTP surface calls this; it is the contract any token
    /// consumer checks against. A token is dead from the second `exp` is reached.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e),
            })?;
        if data.claims.exp <= chrono::Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(data.claims)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: i64, username: &str) -> anyhow::Result<String> {
        self.issue_at(user_id, username, chrono::Utc::now().timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 60 * 60;

    #[test]
    fn fresh_token_carries_user_identity() {
        let issuer = JwtTokenIssuer::new("test-secret", HOUR);
        let token = issuer.issue(42, "alice").unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, HOUR);
    }

    #[test]
    fn token_is_dead_one_hour_after_issue() {
        let issuer = JwtTokenIssuer::new("test-secret", HOUR);
        let issued_at = chrono::Utc::now().timestamp() - HOUR;
        let token = issuer.issue_at(42, "alice", issued_at).unwrap();
        assert!(matches!(issuer.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn token_is_alive_just_before_expiry() {
        let issuer = JwtTokenIssuer::new("test-secret", HOUR);
        let issued_at = chrono::Utc::now().timestamp() - HOUR + 60;
        let token = issuer.issue_at(1, "bob", issued_at).unwrap();
        assert_eq!(issuer.verify(&token).unwrap().iat, issued_at);
    }

    #[test]
    fn foreign_signature_is_rejected() {
        let token = JwtTokenIssuer::new("one-secret", HOUR)
            .issue(1, "bob")
            .unwrap();
        let err = JwtTokenIssuer::new("other-secret", HOUR)
            .verify(&token)
            .unwrap_err();
        assert!(matches!(err, TokenError::Invalid(_)));
    }

    #[test]
    fn overflowing_lifetime_is_an_error() {
        let issuer = JwtTokenIssuer::new("test-secret", i64::MAX);
        let err = issuer.issue(1, "bob").unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn payload_uses_user_id_camel_case() {
        let issuer = JwtTokenIssuer::new("test-secret", HOUR);
        let token = issuer.issue(5, "carol").unwrap();
        let claims = jsonwebtoken::decode::<serde_json::Value>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap()
        .claims;
        assert_eq!(claims["userId"], 5);
        assert_eq!(claims["username"], "carol");
    }
}
