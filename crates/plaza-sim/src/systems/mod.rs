//! ECS systems that operate on the scene world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; everything lives in components or is passed in.

pub mod camera;
pub mod movement;
pub mod proximity;
pub mod snapshot;
