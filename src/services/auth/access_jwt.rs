use std::collections::HashSet;
use std::{error::Error as StdError, fmt};

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::services::auth::SubjectId;

// Errors returned by access-token verification.
#[derive(Debug)]
pub enum AccessJwtError {
    Jwt(jsonwebtoken::errors::Error),
    EmptyClaim(&'static str),
}

impl fmt::Display for AccessJwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::EmptyClaim(name) => write!(f, "empty '{}' claim", name),
        }
    }
}

impl StdError for AccessJwtError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AccessJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Access token (JWT) claims.
///
/// Only `id` is interpreted. `exp`/`nbf` are checked by `Validation` when present
/// and are optional otherwise; `exp` is kept for the request context.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    // Required: a signed token without `id` names no subject and is rejected (401).
    pub id: SubjectId,

    #[serde(default)]
    pub exp: Option<u64>,
}

/// What the verifier hands to the rest of the request.
#[derive(Debug, Clone)]
pub struct VerifiedAccessToken {
    pub subject_id: SubjectId,
    pub expires_at: Option<DateTime<Utc>>,
}

/// HMAC access-token verifier keyed by the process-wide shared secret.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AuthService {
    pub fn new(
        secret: &str,
        issuer: Option<&str>,
        audience: Option<&str>,
        leeway_seconds: u64,
    ) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // exp is honoured when present but not demanded.
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = leeway_seconds;

        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }
        match audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key,
            validation,
        }
    }

    // Signature + temporal checks only.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }

    /// Verify, then convert claims into the type the middleware stores on the request.
    ///
    /// A token whose `id` is blank is rejected even when correctly signed.
    pub fn verify_verified(&self, token: &str) -> Result<VerifiedAccessToken, AccessJwtError> {
        let claims = self.verify(token)?;

        if claims.id.is_blank() {
            return Err(AccessJwtError::EmptyClaim("id"));
        }

        let expires_at = claims
            .exp
            .and_then(|exp| i64::try_from(exp).ok())
            .and_then(|exp| DateTime::<Utc>::from_timestamp(exp, 0));

        Ok(VerifiedAccessToken {
            subject_id: claims.id,
            expires_at,
        })
    }
}
