/*
 * Responsibility
 * - decide whether an authenticated subject holds a required role
 * - subject lookup, then one batch lookup of its roles, then a membership test
 * - no caching: each call reads the stores afresh
 */
use std::borrow::Cow;
use std::sync::Arc;

use thiserror::Error;

use crate::repos::{IdentityStore, RepoError, RoleStore};
use crate::services::auth::{RequiredRole, SubjectId};

#[derive(Debug, Error)]
pub enum AuthzError {
    #[error("subject not found")]
    SubjectNotFound,
    #[error("{message}")]
    RoleDenied { message: Cow<'static, str> },
    #[error(transparent)]
    Store(#[from] RepoError),
    #[error("role check reached without an authenticated subject")]
    MissingContext,
}

#[derive(Clone)]
pub struct RoleAuthorizer {
    identities: Arc<dyn IdentityStore>,
    roles: Arc<dyn RoleStore>,
}

impl RoleAuthorizer {
    pub fn new(identities: Arc<dyn IdentityStore>, roles: Arc<dyn RoleStore>) -> Self {
        Self { identities, roles }
    }

    /// `Ok(())` means the request may continue.
    ///
    /// The two lookups run one after the other since the second needs the
    /// first's role ids. Dropping the returned future abandons whichever lookup
    /// is in flight.
    pub async fn authorize(
        &self,
        subject_id: &SubjectId,
        required: &RequiredRole,
    ) -> Result<(), AuthzError> {
        let subject = self
            .identities
            .find_subject_by_id(subject_id)
            .await?
            .ok_or(AuthzError::SubjectNotFound)?;

        let roles = self.roles.find_roles_by_ids(&subject.role_ids).await?;

        if roles.iter().any(|role| role.name == required.name()) {
            Ok(())
        } else {
            Err(AuthzError::RoleDenied {
                message: required.denial().clone(),
            })
        }
    }
}
