//! Read-only collaborator interfaces consulted by the role authorizer.
//!
//! The authorizer only ever reads through these traits. Implementations must be
//! cheap to share (`Arc<dyn ...>`) and must not cache: every call reflects the
//! backing store at the time it runs.
use async_trait::async_trait;

use crate::repos::error::RepoError;
use crate::services::auth::SubjectId;

pub type RoleId = i64;

/// A user record as far as authorization cares: who it is and which role ids it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: SubjectId,
    pub role_ids: Vec<RoleId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
}

#[async_trait]
pub trait IdentityStore: Send + Sync {
    // Returns `Ok(None)` when no subject has this id.
    async fn find_subject_by_id(&self, id: &SubjectId) -> Result<Option<Subject>, RepoError>;
}

#[async_trait]
pub trait RoleStore: Send + Sync {
    // Batch membership lookup; unknown ids are skipped, order is unspecified.
    async fn find_roles_by_ids(&self, ids: &[RoleId]) -> Result<Vec<Role>, RepoError>;
}
