/*
 * Responsibility
 * - public interface of the middleware layer (re-exports)
 * - auth: token verification + role gates; http/cors: cross-cutting layers
 */
pub mod auth;
pub mod cors;
pub mod http;
