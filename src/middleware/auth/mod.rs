//! Per-request auth pipeline: `access` verifies the token and attaches the
//! subject, `role` gates a route on one required role. `access` must wrap
//! `role` (apply it last) so the subject is present when the gate runs.
pub mod access;
pub mod role;

#[cfg(test)]
pub(crate) mod test_support;
