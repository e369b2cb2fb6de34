/*
 * Responsibility
 * - what the identity/role repos report upward
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    // Displayed as the driver's own message; surfaced to callers as the fault text.
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}
