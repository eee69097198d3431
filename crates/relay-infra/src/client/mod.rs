//! Client-side adapters for reaching the relay server.

pub mod http;

pub use http::HttpChatBackend;
