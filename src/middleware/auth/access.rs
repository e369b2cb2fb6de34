//! access token verification → AuthCtx into request extensions
//!
//! - token comes from `x-access-token` or `Authorization` (see `services::auth::credential`)
//! - no token at all: 403, bad token: 401
//! - on success the subject id is inserted once and never touched again downstream

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
use crate::services::auth::credential::{self, CredentialError};
use crate::state::AppState;

/// Require a verified access token on every route of `router`.
///
/// Uses `route_layer`, so unmatched paths still 404 instead of asking for a token.
///
/// ```ignore
/// let protected = middleware::auth::access::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 from_fn cannot take the State extractor; pass state via from_fn_with_state
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = match credential::extract(req.headers()) {
        Ok(token) => token,
        Err(CredentialError::Missing) => {
            tracing::debug!("no access token presented");
            return Err(AppError::MissingCredential);
        }
        Err(CredentialError::Unreadable) => {
            tracing::warn!("access token header is not valid ascii");
            return Err(AppError::InvalidCredential);
        }
    };

    let verified = match state.auth.verify_verified(token) {
        Ok(verified) => verified,
        Err(err) => {
            tracing::warn!(error = %err, "access token verification failed");
            return Err(AppError::InvalidCredential);
        }
    };

    tracing::debug!(subject_id = %verified.subject_id, "access token verified");

    // middleware → extractor
    req.extensions_mut().insert(AuthCtx::from(verified));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::auth::test_support::*;
    use axum::http::{StatusCode, header};
    use axum::routing::get;

    fn app(store: MemoryStore) -> (Router, std::sync::Arc<MemoryStore>) {
        let (state, store) = state_with(store);
        let router = apply(
            Router::new().route("/me", get(echo_subject)),
            state.clone(),
        )
        .with_state(state);
        (router, store)
    }

    #[tokio::test]
    async fn no_headers_is_forbidden_and_handler_is_not_reached() {
        let (app, store) = app(MemoryStore::new());

        let (status, body) = send(app, get_req("/me", &[])).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "No token provided!");
        assert_eq!(store.lookups(), 0);
    }

    #[tokio::test]
    async fn subject_is_attached_for_either_header_and_either_form() {
        let token = token_for("7");
        let cases = [
            (ACCESS_TOKEN, token.clone()),
            (ACCESS_TOKEN, format!("Bearer {token}")),
            (header::AUTHORIZATION.as_str(), token.clone()),
            (header::AUTHORIZATION.as_str(), format!("Bearer {token}")),
        ];

        for (name, value) in cases {
            let (app, _) = app(MemoryStore::new());
            let (status, body) = send(app, get_req("/me", &[(name, value.as_str())])).await;
            assert_eq!(status, StatusCode::OK, "header {name}");
            assert_eq!(body["subject_id"], "7");
        }
    }

    #[tokio::test]
    async fn numeric_id_claim_is_attached_as_text() {
        let (app, _) = app(MemoryStore::new());
        let token = sign(serde_json::json!({ "id": 42, "exp": in_minutes(10) }), SECRET);

        let (status, body) = send(app, get_req("/me", &[(ACCESS_TOKEN, token.as_str())])).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["subject_id"], "42");
    }

    #[tokio::test]
    async fn bad_tokens_are_unauthorized_in_either_header() {
        let forged = sign(
            serde_json::json!({ "id": "7", "exp": in_minutes(10) }),
            "someone-elses-secret",
        );
        let expired = expired_token_for("7");

        for bad in [forged, expired, "garbage".to_string()] {
            for name in [ACCESS_TOKEN, header::AUTHORIZATION.as_str()] {
                let (app, _) = app(MemoryStore::new());
                let (status, body) = send(app, get_req("/me", &[(name, bad.as_str())])).await;
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(body["message"], "Unauthorized!");
            }
        }
    }

    #[tokio::test]
    async fn signed_token_without_id_claim_is_unauthorized() {
        let (app, _) = app(MemoryStore::new());
        let token = sign(serde_json::json!({ "sub": "x", "exp": in_minutes(10) }), SECRET);

        let (status, body) = send(app, get_req("/me", &[(ACCESS_TOKEN, token.as_str())])).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Unauthorized!");
    }

    #[tokio::test]
    async fn dedicated_header_wins_over_authorization() {
        let (app, _) = app(MemoryStore::new());
        let good = token_for("7");

        // a valid standard header cannot rescue a bad dedicated one
        let (status, _) = send(
            app,
            get_req(
                "/me",
                &[
                    (ACCESS_TOKEN, "garbage"),
                    (header::AUTHORIZATION.as_str(), format!("Bearer {good}").as_str()),
                ],
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unmatched_paths_do_not_ask_for_a_token() {
        let (app, _) = app(MemoryStore::new());

        let (status, _) = send_raw(app, get_req("/nope", &[])).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
