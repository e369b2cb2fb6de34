/*
 * Responsibility
 * - the "authenticated request" type seen by handlers
 * - inserted into request extensions by the access middleware, exactly once per request
 */
use chrono::{DateTime, Utc};

use crate::services::auth::{SubjectId, VerifiedAccessToken};

/// Context attached to a request whose access token verified.
///
/// - `subject_id` is the token's `id` claim, unchanged
/// - `expires_at` is the token's `exp`, when it had one
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub subject_id: SubjectId,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<VerifiedAccessToken> for AuthCtx {
    fn from(token: VerifiedAccessToken) -> Self {
        Self {
            subject_id: token.subject_id,
            expires_at: token.expires_at,
        }
    }
}
