//! role gate: one middleware, parameterized by the role a route requires
//!
//! ```ignore
//! let admin = middleware::auth::role::apply(admin, state.clone(), RequiredRole::admin());
//! let protected = middleware::auth::access::apply(admin.merge(other), state);
//! ```

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::{AuthzError, RequiredRole};
use crate::state::AppState;

#[derive(Clone)]
struct RoleGate {
    state: AppState,
    required: RequiredRole,
}

/// Allow requests on `router` only for subjects holding `required`.
///
/// Must run inside `access::apply`, which supplies the subject.
pub fn apply(router: Router<AppState>, state: AppState, required: RequiredRole) -> Router<AppState> {
    let gate = RoleGate { state, required };
    router.route_layer(middleware::from_fn_with_state(gate, role_middleware))
}

async fn role_middleware(
    State(gate): State<RoleGate>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let role = gate.required.name();

    // cloned: the request body is not Sync, so no borrow of `req` may cross the await below
    let Some(ctx) = req.extensions().get::<AuthCtx>().cloned() else {
        tracing::error!(role, "role gate mounted outside the access middleware");
        return Err(AuthzError::MissingContext.into());
    };

    match gate.state.authorizer.authorize(&ctx.subject_id, &gate.required).await {
        Ok(()) => {}
        Err(AuthzError::Store(err)) => {
            tracing::error!(subject_id = %ctx.subject_id, role, error = %err, "role lookup failed");
            return Err(AuthzError::Store(err).into());
        }
        Err(err) => {
            tracing::info!(subject_id = %ctx.subject_id, role, reason = %err, "role check denied");
            return Err(err.into());
        }
    }

    Ok(next.run(req).await)
}
