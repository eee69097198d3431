//! Infrastructure layer for the chat relay.
//!
//! Contains implementations of the ports defined in `relay-core`: the Gemini
//! generation provider, the HTTP chat backend used by client sessions, and
//! environment-based configuration and secret lookup.

pub mod client;
pub mod config;
pub mod llm;
pub mod secret;
