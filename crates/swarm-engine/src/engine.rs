//! The engine context object.
//!
//! `SwarmEngine` owns the hecs agent pool, the target registry, the
//! frame clock, and the seeded RNG — no global state, so a host can
//! run several independent instances and tests need no live canvas or
//! camera. Completely headless.
//!
//! Ordering discipline (single-threaded, cooperative): a registry
//! commit completes before the assignment pass for that cycle, and
//! assignment completes before the next integration step consumes its
//! bindings. The render loop never waits on a detector — `step` uses
//! whatever was committed last.

use std::collections::VecDeque;
use std::time::Instant;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use swarm_core::commands::EngineCommand;
use swarm_core::config::EngineConfig;
use swarm_core::enums::Modality;
use swarm_core::events::TargetEvent;
use swarm_core::state::EngineSnapshot;
use swarm_core::types::{EngineTime, FrameSize};

use crate::clock::FrameClock;
use crate::normalize::{self, DetectionBatch};
use crate::pool;
use crate::registry::TargetRegistry;
use crate::sources::DetectorInbox;
use crate::systems;

/// One engine instance: a fixed agent pool steering toward whatever
/// the registry currently holds.
pub struct SwarmEngine {
    world: World,
    /// Spawn-order entities; the pool index used by index-based policies.
    pool: Vec<Entity>,
    registry: TargetRegistry,
    clock: FrameClock,
    config: EngineConfig,
    rng: ChaCha8Rng,
    time: EngineTime,
    command_queue: VecDeque<EngineCommand>,
    pending_events: Vec<TargetEvent>,
    active_modality: Option<Modality>,
}

impl SwarmEngine {
    /// Create an engine and spawn its pool. Degenerate config values
    /// are repaired, not rejected.
    pub fn new(config: EngineConfig) -> Self {
        let config = config.sanitized();
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let pool = pool::spawn_pool(&mut world, &config, &mut rng);
        let clock = FrameClock::new(config.max_dt);

        Self {
            world,
            pool,
            registry: TargetRegistry::new(),
            clock,
            config,
            rng,
            time: EngineTime::default(),
            command_queue: VecDeque::new(),
            pending_events: Vec::new(),
            active_modality: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Queue a host command for processing at the next step boundary.
    pub fn queue_command(&mut self, command: EngineCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = EngineCommand>) {
        self.command_queue.extend(commands);
    }

    /// Ingest one detector batch: normalize → commit → reassign.
    /// This is the assignment cadence; bindings are not recomputed per
    /// render frame.
    pub fn ingest(&mut self, batch: DetectionBatch) {
        let modality = batch.modality;
        let targets = normalize::normalize(&batch, self.config.canvas);
        let events = self.registry.commit(modality, targets);
        self.pending_events.extend(events);
        self.refresh_active_modality();
        self.reassign();
    }

    /// Drain the detector inbox and ingest each surviving batch
    /// (newest per modality). Never blocks; an empty inbox leaves the
    /// last committed sets in place — stale targets over a stalled
    /// render loop.
    pub fn pump(&mut self, inbox: &DetectorInbox) {
        for batch in inbox.drain_latest() {
            self.ingest(batch);
        }
    }

    /// Advance one render frame using wall-clock time.
    pub fn step(&mut self, now: Instant) -> EngineSnapshot {
        self.apply_commands();
        let dt = self.clock.tick(now);
        self.integrate(dt)
    }

    /// Advance one render frame with an externally supplied raw delta
    /// (seconds). Still clamped to `max_dt`.
    pub fn step_dt(&mut self, raw_dt: f64) -> EngineSnapshot {
        self.apply_commands();
        let dt = self.clock.clamp(raw_dt);
        self.integrate(dt)
    }

    fn integrate(&mut self, dt: f64) -> EngineSnapshot {
        systems::steering::run(&mut self.world, &self.pool, &self.config, dt, &mut self.rng);
        self.time.advance(dt);
        let events = std::mem::take(&mut self.pending_events);
        systems::snapshot::build(
            &mut self.world,
            &self.pool,
            &self.registry,
            &self.config,
            self.time,
            self.active_modality,
            events,
        )
    }

    fn reassign(&mut self) {
        systems::assignment::run(&mut self.world, &self.pool, &self.registry, &self.config);
    }

    fn refresh_active_modality(&mut self) {
        let active = self.registry.active_modality(
            &self.config.modality_priority,
            self.config.modality_min_targets,
        );
        if active != self.active_modality {
            self.pending_events.push(TargetEvent::ModalityChanged {
                from: self.active_modality,
                to: active,
            });
            self.active_modality = active;
        }
    }

    /// Process all queued commands, reassigning once if any of them
    /// invalidated the current bindings.
    fn apply_commands(&mut self) {
        let mut rebind = false;
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                EngineCommand::SetCanvasSize { width, height } => {
                    if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
                        self.config.canvas = FrameSize::new(width, height);
                        // Hidden idles skip the integrator's boundary
                        // pass, so the shrink must re-clamp every agent
                        // right here, before the next snapshot.
                        pool::clamp_to_canvas(&mut self.world, &self.pool, &self.config);
                        rebind = true;
                    }
                }
                EngineCommand::SetAssignmentPolicy { policy } => {
                    self.config.assignment_policy = policy;
                    rebind = true;
                }
                EngineCommand::SetModalityPriority { priority } => {
                    self.config.modality_priority = priority;
                    self.refresh_active_modality();
                    rebind = true;
                }
                EngineCommand::SetBoundaryMode { mode } => {
                    self.config.boundary_mode = mode;
                }
                EngineCommand::ScatterAgents => {
                    pool::scatter(&mut self.world, &self.pool, &self.config, &mut self.rng);
                }
            }
        }
        if rebind {
            self.reassign();
        }
    }

    // --- Test access ---

    #[cfg(test)]
    pub(crate) fn agent_position(&mut self, index: usize) -> swarm_core::types::Vec2 {
        self.world
            .query_one_mut::<&swarm_core::components::Position>(self.pool[index])
            .unwrap()
            .0
    }

    #[cfg(test)]
    pub(crate) fn agent_size(&mut self, index: usize) -> swarm_core::types::Vec2 {
        self.world
            .query_one_mut::<&swarm_core::components::AgentBody>(self.pool[index])
            .unwrap()
            .size
    }

    #[cfg(test)]
    pub(crate) fn place_agent(&mut self, index: usize, top_left: swarm_core::types::Vec2) {
        self.world
            .query_one_mut::<&mut swarm_core::components::Position>(self.pool[index])
            .unwrap()
            .0 = top_left;
    }

    #[cfg(test)]
    pub(crate) fn binding(&mut self, index: usize) -> swarm_core::components::Binding {
        *self
            .world
            .query_one_mut::<&swarm_core::components::Binding>(self.pool[index])
            .unwrap()
    }
}
