//! Locating the access token on an inbound request.
//!
//! Two header slots are consulted in a fixed order: the dedicated
//! `x-access-token` header first, then `Authorization`. An empty slot counts as
//! absent. A leading `"Bearer "` is stripped; anything else is taken verbatim, so
//! clients sending a raw token and clients using the bearer scheme both work.
use axum::http::{HeaderMap, HeaderName, header};

pub const ACCESS_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-access-token");

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    /// Neither slot carried a value.
    Missing,
    /// A slot carried a value that is not visible ASCII.
    Unreadable,
}

/// Returns the token found in the first populated slot, prefix removed.
pub fn extract(headers: &HeaderMap) -> Result<&str, CredentialError> {
    let raw = [&ACCESS_TOKEN_HEADER, &header::AUTHORIZATION]
        .into_iter()
        .filter_map(|name| headers.get(name))
        .find(|value| !value.is_empty())
        .ok_or(CredentialError::Missing)?;

    let raw = raw.to_str().map_err(|_| CredentialError::Unreadable)?;

    Ok(strip_scheme(raw))
}

pub fn strip_scheme(raw: &str) -> &str {
    raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw)
}
