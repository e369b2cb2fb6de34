//! Shared fixtures for driving the auth pipeline through a Router.
use std::sync::Arc;

use axum::{
    Json, Router,
    body::{Body, Bytes},
    http::{Request, StatusCode},
};
use chrono::Utc;
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header};
use serde_json::{Value, json};
use tower::ServiceExt;

pub use crate::repos::memory::{FailingStore, MemoryStore};

use crate::api::v1::extractors::AuthCtxExtractor;
use crate::repos::{IdentityStore, RoleStore};
use crate::services::auth::{AuthService, RoleAuthorizer};
use crate::state::AppState;

pub const SECRET: &str = "pipeline-test-secret";
pub const ACCESS_TOKEN: &str = "x-access-token";

pub fn state_with(store: MemoryStore) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(store);
    (state_with_stores(store.clone(), store.clone()), store)
}

pub fn state_with_stores(
    identities: Arc<dyn IdentityStore>,
    roles: Arc<dyn RoleStore>,
) -> AppState {
    AppState::new(
        Arc::new(AuthService::new(SECRET, None, None, 0)),
        RoleAuthorizer::new(identities, roles),
    )
}

pub async fn echo_subject(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<Value> {
    Json(json!({ "subject_id": ctx.subject_id.to_string() }))
}

pub fn in_minutes(minutes: i64) -> i64 {
    Utc::now().timestamp() + minutes * 60
}

pub fn sign(claims: Value, secret: &str) -> String {
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn token_for(id: &str) -> String {
    sign(json!({ "id": id, "exp": in_minutes(10) }), SECRET)
}

pub fn expired_token_for(id: &str) -> String {
    sign(
        json!({ "id": id, "iat": in_minutes(-120), "exp": in_minutes(-60) }),
        SECRET,
    )
}

pub fn get_req(path: &str, headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send_raw(app: Router, req: Request<Body>) -> (StatusCode, Bytes) {
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    (status, bytes)
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, req).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}
