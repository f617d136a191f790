//! Core types and definitions for the swarm overlay engine.
//!
//! This crate defines the vocabulary shared across the workspace:
//! geometric types, targets, components, configuration, commands,
//! events, and snapshot views. It has no dependency on the ECS or
//! any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
