pub mod access_jwt;
pub mod authorizer;
pub mod credential;
pub mod factory;
pub mod role;
pub mod subject;

pub use access_jwt::{AuthService, VerifiedAccessToken};
pub use authorizer::{AuthzError, RoleAuthorizer};
pub use factory::build_auth_service;
pub use role::RequiredRole;
pub use subject::SubjectId;
