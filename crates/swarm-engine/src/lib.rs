//! Agent–target assignment and steering engine.
//!
//! Owns the hecs agent pool, ingests normalized target batches at
//! detector cadence, recomputes agent→target bindings per assignment
//! cycle, and integrates agent motion once per render frame. Produces
//! an `EngineSnapshot` for the renderer each step.

pub mod clock;
pub mod engine;
pub mod normalize;
pub mod pool;
pub mod registry;
pub mod sources;
pub mod systems;

pub use engine::SwarmEngine;
pub use swarm_core as core;
