//! Business logic and trait definitions for the chat relay.
//!
//! This crate defines the "ports" (provider and backend traits) that the
//! infrastructure layer implements, plus the two pieces of sequencing logic:
//! the stateless [`proxy::ChatProxy`] and the client-side
//! [`session::SessionManager`]. It depends only on `relay-types` -- never on
//! `relay-infra` or any HTTP crate.

pub mod event;
pub mod llm;
pub mod proxy;
pub mod session;
