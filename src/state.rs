/*
 * Responsibility
 * - shared context bound to the Router (AppState)
 *   - auth: token verifier, authorizer: role checks over the identity/role stores
 * - Clone is cheap (everything behind Arc) and nothing in here changes after startup
 */
use std::sync::Arc;

use crate::services::auth::{AuthService, RoleAuthorizer};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub authorizer: RoleAuthorizer,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>, authorizer: RoleAuthorizer) -> Self {
        Self { auth, authorizer }
    }
}
