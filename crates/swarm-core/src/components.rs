//! ECS components for agent entities.
//!
//! Components are plain data structs with no behavior.
//! Engine logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::{TargetId, Vec2};

/// Top-left corner of an agent's footprint, canvas space.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Current velocity (px/s). Only integrated in force-accumulation mode;
/// bounded-step mode keeps it for boundary bookkeeping.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Immutable per-agent traits, rolled once at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgentBody {
    /// Footprint width/height (pixels).
    pub size: Vec2,
    /// Max pursuit speed for this agent (px/s).
    pub speed: f64,
}

/// The agent's current target binding, rewritten every assignment cycle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Binding {
    /// Target this agent pursues; `None` means idle.
    pub target: Option<TargetId>,
    /// Pursue point in agent top-left space (goal already offset by
    /// half the footprint and clamped into canvas bounds).
    pub pursue: Option<Vec2>,
    /// Whether the agent participates in rendering this cycle.
    pub visible: bool,
}

/// Idle wander state. The goal survives assignment cycles so that a
/// no-op reassignment consumes no randomness.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Wander {
    /// Current wander goal (agent top-left space), if one has been rolled.
    pub goal: Option<Vec2>,
}
