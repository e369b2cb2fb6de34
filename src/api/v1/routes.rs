/*
 * Responsibility
 * - URL layout of v1
 * - which routes need a token, and which role each gated route requires
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{
    content::{admin_board, moderator_board, public_board, user_board},
    health::health,
};
use crate::middleware::auth::{access, role};
use crate::services::auth::RequiredRole;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/health", get(health))
        .route("/test/all", get(public_board));

    let user = Router::new().route("/test/user", get(user_board));

    let moderator = role::apply(
        Router::new().route("/test/mod", get(moderator_board)),
        state.clone(),
        RequiredRole::moderator(),
    );

    let admin = role::apply(
        Router::new().route("/test/admin", get(admin_board)),
        state.clone(),
        RequiredRole::admin(),
    );

    // access wraps the role gates, so verification always runs first
    let protected = access::apply(user.merge(moderator).merge(admin), state);

    public.merge(protected)
}
