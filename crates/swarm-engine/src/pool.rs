//! Agent pool spawn factories.
//!
//! The pool is allocated once at engine creation with randomized
//! footprints, speeds, and positions; agents are never destroyed.
//! Spawn order is the pool order used by index-based policies.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use swarm_core::components::{AgentBody, Binding, Position, Velocity, Wander};
use swarm_core::config::EngineConfig;
use swarm_core::enums::IdleBehavior;
use swarm_core::types::{FrameSize, Vec2};

/// Spawn the fixed agent pool. Returns entities in pool (index) order.
pub fn spawn_pool(world: &mut World, config: &EngineConfig, rng: &mut ChaCha8Rng) -> Vec<Entity> {
    (0..config.agent_count)
        .map(|_| {
            let size = Vec2::new(
                roll_range(rng, config.agent_size_min, config.agent_size_max),
                roll_range(rng, config.agent_size_min, config.agent_size_max),
            );
            let speed = config.speed + rng.gen::<f64>() * config.speed_jitter;
            let position = random_position(config.canvas, size, rng);
            let binding = Binding {
                visible: config.idle_behavior == IdleBehavior::Wander,
                ..Binding::default()
            };
            world.spawn((
                Position(position),
                Velocity::default(),
                AgentBody { size, speed },
                binding,
                Wander::default(),
            ))
        })
        .collect()
}

/// Re-randomize every agent's position (camera-flip gesture). Wander
/// goals are cleared so idle agents pick fresh ones from where they land.
pub fn scatter(world: &mut World, pool: &[Entity], config: &EngineConfig, rng: &mut ChaCha8Rng) {
    for &entity in pool {
        if let Ok((pos, vel, body, wander)) =
            world.query_one_mut::<(&mut Position, &mut Velocity, &AgentBody, &mut Wander)>(entity)
        {
            pos.0 = random_position(config.canvas, body.size, rng);
            vel.0 = Vec2::ZERO;
            wander.goal = None;
        }
    }
}

/// Pull every agent's footprint back inside the canvas. Run on resize:
/// parked agents never pass through the integrator's boundary pass, so
/// a shrink must re-clamp them here.
pub fn clamp_to_canvas(world: &mut World, pool: &[Entity], config: &EngineConfig) {
    for &entity in pool {
        if let Ok((pos, body)) = world.query_one_mut::<(&mut Position, &AgentBody)>(entity) {
            pos.0.x = pos.0.x.clamp(0.0, (config.canvas.width - body.size.x).max(0.0));
            pos.0.y = pos.0.y.clamp(0.0, (config.canvas.height - body.size.y).max(0.0));
        }
    }
}

/// A random top-left position keeping the whole footprint on canvas.
pub fn random_position(canvas: FrameSize, size: Vec2, rng: &mut ChaCha8Rng) -> Vec2 {
    Vec2::new(
        rng.gen_range(0.0..=(canvas.width - size.x).max(0.0)),
        rng.gen_range(0.0..=(canvas.height - size.y).max(0.0)),
    )
}

fn roll_range(rng: &mut ChaCha8Rng, min: f64, max: f64) -> f64 {
    rng.gen_range(min..=max.max(min))
}
