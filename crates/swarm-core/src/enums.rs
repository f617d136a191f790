//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Shape of a normalized target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// A single point (hand landmark, pose keypoint, color centroid).
    Point,
    /// An area target (object or color-region bounding box).
    Box,
}

/// Detector modality that produced a batch of targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modality {
    /// Hand landmark detector.
    Hand,
    /// Pose keypoint detector.
    Pose,
    /// Object bounding-box detector.
    Object,
    /// Color-region detector.
    Color,
}

/// Strategy for mapping the agent pool onto the current target set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentPolicy {
    /// Agent i pursues target i; leftover agents idle.
    #[default]
    OneToOne,
    /// Each agent pursues its nearest target (ties: first in list order).
    Nearest,
    /// Up to a cap of agents spread along each box target's perimeter.
    Perimeter,
    /// Agent i pursues target (i mod target count); every agent gets one.
    RoundRobin,
}

/// What happens to an agent's position at the canvas edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryMode {
    /// Position held at the edge, residual velocity zeroed on that axis.
    #[default]
    Clamp,
    /// Velocity component inverted, position mirrored back inside.
    Reflect,
}

/// Motion model for the steering integrator.
///
/// The two modes have different speed semantics and must never be
/// mixed within one configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PursuitMode {
    /// `step = min(distance, speed * dt)` along the unit vector toward
    /// the goal. Constant-speed, overshoot-free approach.
    #[default]
    BoundedStep,
    /// Pursuit, repulsion, and wander sum into a velocity vector,
    /// clamped to the agent's max speed, then `position += velocity * dt`.
    ForceAccumulation,
}

/// What unbound agents do while no target claims them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdleBehavior {
    /// Drift toward random goals, staying visually alive.
    #[default]
    Wander,
    /// Removed from rendering (and from repulsion) until rebound.
    Hide,
}
