//! Engine constants and default tuning parameters.
//!
//! The many near-identical overlay variants differ only in these
//! values; a variant is expressed as an `EngineConfig`, not a fork.

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1280.0;

/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 720.0;

// --- Agent pool ---

/// Default number of agents in the fixed pool.
pub const DEFAULT_AGENT_COUNT: usize = 15;

/// Smallest randomized agent footprint edge (pixels).
pub const DEFAULT_AGENT_SIZE_MIN: f64 = 40.0;

/// Largest randomized agent footprint edge (pixels).
pub const DEFAULT_AGENT_SIZE_MAX: f64 = 120.0;

/// Base pursuit speed (pixels per second).
pub const DEFAULT_SPEED: f64 = 1000.0;

/// Per-agent additive speed jitter, rolled once at spawn (pixels per second).
pub const DEFAULT_SPEED_JITTER: f64 = 500.0;

// --- Steering ---

/// Within this distance of its goal an agent holds (bound) or
/// re-rolls a wander goal (idle). Pixels.
pub const DEFAULT_ARRIVE_RADIUS: f64 = 10.0;

/// Minimum separation below which pairwise repulsion applies (pixels).
pub const DEFAULT_REPEL_DISTANCE: f64 = 80.0;

/// Repulsion strength; push magnitude is `repel_force / d^2` (px/s).
pub const DEFAULT_REPEL_FORCE: f64 = 60_000.0;

/// Floor on the distance used in the inverse-square repulsion term,
/// keeping near-coincident agents from producing unbounded pushes.
pub const REPEL_DISTANCE_FLOOR: f64 = 1.0;

/// Cap on the random wander impulse in force-accumulation mode (px/s per frame).
pub const DEFAULT_WANDER_IMPULSE: f64 = 300.0;

/// Maximum accepted frame delta in seconds. A stalled frame (tab
/// backgrounded, inference hiccup) integrates as this, not as the
/// real elapsed time.
pub const DEFAULT_MAX_DT: f64 = 0.05;

// --- Assignment ---

/// Default cap on agents allocated per target under the perimeter policy.
pub const DEFAULT_MAX_AGENTS_PER_TARGET: usize = 15;

/// A modality must have at least this many targets to claim the pool.
pub const DEFAULT_MODALITY_MIN_TARGETS: usize = 1;

// --- Renderer passthrough ---

/// Default link-line distance (pixels). Consumed by the renderer only;
/// the engine never reads it.
pub const DEFAULT_LINK_DISTANCE: f64 = 240.0;

// --- Detector cadence ---

/// Default per-modality detector poll interval in milliseconds.
pub const DEFAULT_DETECT_INTERVAL_MS: u64 = 200;
