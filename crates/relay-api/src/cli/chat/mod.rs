//! Interactive terminal chat client.
//!
//! Drives a `SessionManager` against a running relay server and redraws on
//! every session event. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
