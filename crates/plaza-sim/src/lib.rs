//! Scene simulation for PLAZA.
//!
//! Owns the hecs ECS world, aggregates input, moves the character,
//! follows it with the camera and tracks zone proximity once per frame,
//! producing a `FrameSnapshot` for the host.

pub mod engine;
pub mod input;
pub mod systems;
pub mod world_setup;

pub use engine::SceneEngine;
pub use plaza_core as core;
