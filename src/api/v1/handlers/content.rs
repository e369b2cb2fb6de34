/*
 * Responsibility
 * - boards under /test, one per access level
 * - the gate decides who gets here; handlers only read AuthCtx
 */
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::v1::extractors::AuthCtxExtractor;

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub content: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    // only the user board reports when the presented token lapses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_expires_at: Option<DateTime<Utc>>,
}

pub async fn public_board() -> Json<BoardResponse> {
    Json(BoardResponse {
        content: "Public Content.",
        subject_id: None,
        token_expires_at: None,
    })
}

pub async fn user_board(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<BoardResponse> {
    Json(BoardResponse {
        content: "User Content.",
        subject_id: Some(ctx.subject_id.to_string()),
        token_expires_at: ctx.expires_at,
    })
}

pub async fn moderator_board(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<BoardResponse> {
    board("Moderator Content.", ctx.subject_id.to_string())
}

pub async fn admin_board(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<BoardResponse> {
    board("Admin Content.", ctx.subject_id.to_string())
}

fn board(content: &'static str, subject_id: String) -> Json<BoardResponse> {
    Json(BoardResponse {
        content,
        subject_id: Some(subject_id),
        token_expires_at: None,
    })
}
