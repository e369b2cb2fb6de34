pub mod error;
pub mod role_repo;
pub mod store;
pub mod user_repo;

#[cfg(test)]
pub mod memory;

pub use error::RepoError;
pub use role_repo::PgRoleStore;
pub use store::{IdentityStore, RoleStore};
pub use user_repo::PgIdentityStore;
