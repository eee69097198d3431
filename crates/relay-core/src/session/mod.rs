//! Client-side chat session orchestration.
//!
//! [`manager::SessionManager`] owns the message log and the pending flag;
//! [`backend::ChatBackend`] is the port it uses to reach the proxy.

pub mod backend;
pub mod manager;
