//! In-memory identity/role store for tests.
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::repos::error::RepoError;
use crate::repos::store::{IdentityStore, Role, RoleId, RoleStore, Subject};
use crate::services::auth::SubjectId;

#[derive(Debug, Default)]
pub struct MemoryStore {
    subjects: HashMap<String, Vec<RoleId>>,
    roles: HashMap<RoleId, String>,
    lookups: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
            .with_role(1, "user")
            .with_role(2, "moderator")
            .with_role(3, "admin")
    }

    pub fn with_role(mut self, id: RoleId, name: &str) -> Self {
        self.roles.insert(id, name.to_string());
        self
    }

    /// Adds a subject holding the named roles (names must already be registered).
    pub fn with_subject(mut self, id: &str, role_names: &[&str]) -> Self {
        let role_ids = role_names
            .iter()
            .filter_map(|name| {
                self.roles
                    .iter()
                    .find(|(_, n)| n.as_str() == *name)
                    .map(|(id, _)| *id)
            })
            .collect();
        self.subjects.insert(id.to_string(), role_ids);
        self
    }

    /// Number of store calls served so far (both traits).
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn find_subject_by_id(&self, id: &SubjectId) -> Result<Option<Subject>, RepoError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.subjects.get(id.as_str()).map(|role_ids| Subject {
            id: id.clone(),
            role_ids: role_ids.clone(),
        }))
    }
}

#[async_trait]
impl RoleStore for MemoryStore {
    async fn find_roles_by_ids(&self, ids: &[RoleId]) -> Result<Vec<Role>, RepoError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(ids
            .iter()
            .filter_map(|id| {
                self.roles.get(id).map(|name| Role {
                    id: *id,
                    name: name.clone(),
                })
            })
            .collect())
    }
}

/// Store whose every call fails like an exhausted connection pool.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl IdentityStore for FailingStore {
    async fn find_subject_by_id(&self, _id: &SubjectId) -> Result<Option<Subject>, RepoError> {
        Err(RepoError::Db(sqlx::Error::PoolTimedOut))
    }
}

#[async_trait]
impl RoleStore for FailingStore {
    async fn find_roles_by_ids(&self, _ids: &[RoleId]) -> Result<Vec<Role>, RepoError> {
        Err(RepoError::Db(sqlx::Error::PoolTimedOut))
    }
}
