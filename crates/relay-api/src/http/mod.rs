//! HTTP layer for the chat relay.
//!
//! Axum-based JSON API under `/api/` with permissive CORS and request
//! tracing.

pub mod error;
pub mod handlers;
pub mod router;
