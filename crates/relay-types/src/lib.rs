//! Shared domain types for the chat relay.
//!
//! This crate contains the types exchanged between the session client, the
//! proxy service and the generation provider: chat messages, session state,
//! the proxy wire contract, provider request shapes, and error enums.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod event;
pub mod llm;
pub mod proxy;
