//! Bearer token handling for the platform API
//!
//! Tokens are issued by the platform's identity provider and pasted in by the
//! user or configured at deployment time. The payload is decoded without
//! signature verification; the platform itself is the enforcement point.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, PlatformResult};

/// Token information tracked client-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl TokenInfo {
    /// Check if the token is expired (with 5 minute buffer)
    pub fn is_expired(&self) -> bool {
        let now = Utc::now();
        let buffer = Duration::minutes(5);
        self.expires_at < now + buffer
    }

    /// Check if the token is valid (not expired)
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }

    /// Build token info from a raw bearer token by decoding its claims
    pub fn from_token(token: impl Into<String>) -> PlatformResult<Self> {
        let token = token.into();
        let claims = decode_claims(&token)?;
        Ok(TokenInfo {
            expires_at: claims.expires_at(),
            token,
        })
    }
}

/// Claims extracted from the token payload
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Directory object id of the signed-in user
    pub oid: Option<String>,
    pub sub: Option<String>,
    pub name: Option<String>,
    pub preferred_username: Option<String>,
    pub exp: Option<i64>,
}

impl Claims {
    /// Opaque directory id identifying the actor, preferring `oid` over `sub`
    pub fn actor_id(&self) -> Option<&str> {
        self.oid.as_deref().or(self.sub.as_deref())
    }

    /// Display name, falling back to the sign-in name
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.preferred_username.as_deref())
            .unwrap_or("Unknown")
    }

    /// Expiry as a UTC timestamp; tokens without `exp` count as expired
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.exp
            .and_then(|exp| Utc.timestamp_opt(exp, 0).single())
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// Decode the payload segment of a JWT without verifying its signature
pub fn decode_claims(token: &str) -> PlatformResult<Claims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) => payload,
        _ => return Err(PlatformError::auth("Malformed bearer token")),
    };

    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| PlatformError::auth(format!("Invalid token encoding: {}", e)))?;

    serde_json::from_slice(&decoded)
        .map_err(|e| PlatformError::auth(format!("Invalid token payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{}.{}.signature", header, body)
    }

    #[test]
    fn test_decode_claims() {
        let token = make_token(serde_json::json!({
            "oid": "11111111-2222-3333-4444-555555555555",
            "name": "Erika Musterfrau",
            "preferred_username": "erika.musterfrau@example.com",
            "exp": 4102444800i64,
        }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.actor_id(), Some("11111111-2222-3333-4444-555555555555"));
        assert_eq!(claims.display_name(), "Erika Musterfrau");
    }

    #[test]
    fn test_decode_claims_falls_back_to_sub() {
        let token = make_token(serde_json::json!({ "sub": "abc123" }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.actor_id(), Some("abc123"));
        assert_eq!(claims.display_name(), "Unknown");
    }

    #[test]
    fn test_decode_claims_malformed() {
        assert!(decode_claims("not-a-token").is_err());
        assert!(decode_claims("a.b").is_err());
        assert!(decode_claims("a.!!!.c").is_err());
    }

    #[test]
    fn test_token_expiry() {
        let expired = TokenInfo {
            token: "test".to_string(),
            expires_at: Utc::now() - Duration::minutes(10),
        };
        assert!(expired.is_expired());
        assert!(!expired.is_valid());

        let valid = TokenInfo {
            token: "test".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        };
        assert!(!valid.is_expired());
        assert!(valid.is_valid());
    }

    #[test]
    fn test_token_without_exp_is_expired() {
        let token = make_token(serde_json::json!({ "oid": "abc" }));
        let info = TokenInfo::from_token(token).unwrap();
        assert!(info.is_expired());
    }
}
