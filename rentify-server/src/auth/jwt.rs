//! JWT token service
//!
//! Issues and verifies the signed, time-bounded credential carried in the
//! `Authorization: Bearer <token>` header.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Default token lifetime
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 365;

/// Claim names owned by the service; caller-supplied values are replaced
const RESERVED_CLAIMS: &[&str] = &["exp", "iat"];

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC signing secret shared by issue and verify
    pub secret: String,
    /// Token lifetime in days
    pub ttl_days: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl_days: DEFAULT_TOKEN_TTL_DAYS,
        }
    }
}

/// Identity claims supplied by the caller at issuance
///
/// `email` is the only claim the gate interprets; everything else is carried
/// through the token untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdentityClaims {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: Map::new(),
        }
    }

    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// On-the-wire token payload
#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    #[serde(flatten)]
    identity: IdentityClaims,
    iat: i64,
    exp: i64,
}

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("No token supplied")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// Stateless token service: nothing is stored server-side, validity is
/// signature plus expiry.
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("ttl_days", &self.config.ttl_days)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Sign `claims` with an expiry `ttl_days` from now
    ///
    /// Does not consult the user store: issuance is decoupled from registration.
    pub fn issue(&self, claims: &IdentityClaims) -> Result<String, JwtError> {
        self.issue_at(claims, Utc::now())
    }

    /// Sign `claims` as if issued at `issued_at`
    pub fn issue_at(
        &self,
        claims: &IdentityClaims,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let mut identity = claims.clone();
        for key in RESERVED_CLAIMS {
            identity.extra.remove(*key);
        }

        let payload = TokenClaims {
            identity,
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::days(self.config.ttl_days)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Verify signature and expiry, returning the embedded claims as issued
    pub fn verify(&self, token: Option<&str>) -> Result<IdentityClaims, JwtError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(JwtError::MissingToken)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        // Caller claims are carried verbatim, including any `aud`
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        let token_data =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    _ => JwtError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims.identity)
    }

    /// Extract the token from an Authorization header value
    ///
    /// The token is the second space-separated part; the scheme word itself
    /// is not checked.
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.split(' ').nth(1).filter(|t| !t.is_empty())
    }
}
