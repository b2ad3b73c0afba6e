//! PLAZA host application.
//!
//! This crate runs the scene engine on its own thread and exposes it to
//! the embedding page through a small set of host operations and a
//! newline-delimited JSON bridge.

pub mod error;
pub mod game_loop;
pub mod ipc;
pub mod sink;
pub mod state;

pub use plaza_core as core;
