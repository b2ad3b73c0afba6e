//! Core types and definitions for the PLAZA portfolio scene.
//!
//! This crate defines the vocabulary shared across the simulation and the
//! host: components, commands, frame snapshots, events, configuration and
//! tuning constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
pub mod zone;
