//! Engine configuration — the full per-variant tuning surface.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{AssignmentPolicy, BoundaryMode, IdleBehavior, Modality, PursuitMode};
use crate::types::FrameSize;

/// Configuration for one engine instance.
///
/// Every field has a serde default, so a variant config file only
/// states what it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed + same inputs = same output.
    pub seed: u64,
    /// Canvas dimensions agents are confined to.
    pub canvas: FrameSize,
    /// Fixed pool size, allocated once at startup.
    pub agent_count: usize,
    /// Randomized footprint range per axis (pixels).
    pub agent_size_min: f64,
    pub agent_size_max: f64,
    /// Base pursuit speed (px/s).
    pub speed: f64,
    /// Additive per-agent speed jitter, rolled at spawn (px/s).
    pub speed_jitter: f64,
    /// Separation below which pairwise repulsion applies (pixels).
    pub repel_distance: f64,
    /// Repulsion strength (push is `repel_force / d^2` px/s).
    pub repel_force: f64,
    /// Link-line distance for the renderer. Never read by the engine.
    pub link_distance: f64,
    /// Agent-to-target mapping strategy.
    pub assignment_policy: AssignmentPolicy,
    /// Modality precedence, highest first. The first modality meeting
    /// `modality_min_targets` claims the whole pool for the cycle.
    pub modality_priority: Vec<Modality>,
    /// Minimum target count for a modality to claim the pool.
    pub modality_min_targets: usize,
    /// Cap on agents allocated to one target (perimeter policy).
    pub max_agents_per_target: usize,
    /// Edge handling: clamp or reflect.
    pub boundary_mode: BoundaryMode,
    /// Motion model. Never mixed within one configuration.
    pub pursuit_mode: PursuitMode,
    /// What unassigned agents do: wander or hide.
    pub idle_behavior: IdleBehavior,
    /// Upper bound on the per-frame delta (seconds).
    pub max_dt: f64,
    /// Goal arrival radius (pixels).
    pub arrive_radius: f64,
    /// Cap on the random wander impulse in force mode (px/s per frame).
    pub wander_impulse: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            canvas: FrameSize::default(),
            agent_count: DEFAULT_AGENT_COUNT,
            agent_size_min: DEFAULT_AGENT_SIZE_MIN,
            agent_size_max: DEFAULT_AGENT_SIZE_MAX,
            speed: DEFAULT_SPEED,
            speed_jitter: DEFAULT_SPEED_JITTER,
            repel_distance: DEFAULT_REPEL_DISTANCE,
            repel_force: DEFAULT_REPEL_FORCE,
            link_distance: DEFAULT_LINK_DISTANCE,
            assignment_policy: AssignmentPolicy::default(),
            modality_priority: vec![
                Modality::Hand,
                Modality::Pose,
                Modality::Object,
                Modality::Color,
            ],
            modality_min_targets: DEFAULT_MODALITY_MIN_TARGETS,
            max_agents_per_target: DEFAULT_MAX_AGENTS_PER_TARGET,
            boundary_mode: BoundaryMode::default(),
            pursuit_mode: PursuitMode::default(),
            idle_behavior: IdleBehavior::default(),
            max_dt: DEFAULT_MAX_DT,
            arrive_radius: DEFAULT_ARRIVE_RADIUS,
            wander_impulse: DEFAULT_WANDER_IMPULSE,
        }
    }
}

impl EngineConfig {
    /// Parse a variant config from JSON; unspecified fields take defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Repair degenerate values instead of failing: the engine's error
    /// posture is to degrade, never to surface an error mid-overlay.
    pub fn sanitized(mut self) -> Self {
        if self.agent_count == 0 {
            self.agent_count = 1;
        }
        if self.agent_size_min > self.agent_size_max {
            std::mem::swap(&mut self.agent_size_min, &mut self.agent_size_max);
        }
        if !(self.max_dt.is_finite() && self.max_dt > 0.0) {
            self.max_dt = DEFAULT_MAX_DT;
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            self.speed = DEFAULT_SPEED;
        }
        if self.max_agents_per_target == 0 {
            self.max_agents_per_target = 1;
        }
        if self.canvas.width <= 0.0 || self.canvas.height <= 0.0 {
            self.canvas = FrameSize::default();
        }
        self
    }
}
