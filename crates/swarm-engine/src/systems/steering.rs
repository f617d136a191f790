//! Steering integrator — per agent, per render frame position update.
//!
//! Combines bounded-step (or force-accumulated) pursuit of the bound
//! point, pairwise inter-agent repulsion, idle wander, and boundary
//! handling. Repulsion is evaluated pairwise among all visible agents
//! each frame: O(n²), acceptable at pool sizes up to ~100 — that is
//! the scaling limit of this engine, by contract, and is not to be
//! silently optimized away.
//!
//! The per-frame displacement of any agent never exceeds
//! `speed * dt`, repulsion included, so a frame-rate spike can never
//! teleport an agent past its target.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use swarm_core::components::{AgentBody, Binding, Position, Velocity, Wander};
use swarm_core::config::EngineConfig;
use swarm_core::constants::REPEL_DISTANCE_FLOOR;
use swarm_core::enums::{BoundaryMode, IdleBehavior, PursuitMode};
use swarm_core::types::Vec2;

/// Velocity damping applied while a force-mode agent sits on its goal.
const ARRIVE_DAMPING: f64 = 6.0;

/// Integrate one frame for the whole pool. `dt` is the already-clamped
/// frame delta from the clock.
pub fn run(
    world: &mut World,
    pool: &[Entity],
    config: &EngineConfig,
    dt: f64,
    rng: &mut ChaCha8Rng,
) {
    if dt <= 0.0 {
        return;
    }

    let repulsion = compute_repulsion(world, pool, config);

    for (i, &entity) in pool.iter().enumerate() {
        let Ok((pos, vel, body, binding, wander)) = world.query_one_mut::<(
            &mut Position,
            &mut Velocity,
            &AgentBody,
            &Binding,
            &mut Wander,
        )>(entity) else {
            continue;
        };

        // Hidden idles are parked: no motion, no rng consumption.
        if binding.target.is_none() && config.idle_behavior == IdleBehavior::Hide {
            vel.0 = Vec2::ZERO;
            continue;
        }

        let goal = resolve_goal(pos.0, body.size, binding, wander, config, rng);

        match config.pursuit_mode {
            PursuitMode::BoundedStep => {
                step_bounded(pos, vel, body, goal, repulsion[i], config, dt);
            }
            PursuitMode::ForceAccumulation => {
                step_forces(pos, vel, body, binding, goal, repulsion[i], config, dt, rng);
            }
        }

        apply_boundary(pos, vel, body.size, config);
    }
}

/// The point this agent moves toward this frame, if any.
///
/// Bound agents use the assignment's pursue point. Idle wanderers use
/// their wander goal, re-rolling when they have none, have arrived, or
/// the goal fell outside the canvas (resize); the re-roll frame itself
/// produces no pursuit, matching the hold-then-retarget cadence of the
/// overlay.
fn resolve_goal(
    position: Vec2,
    size: Vec2,
    binding: &Binding,
    wander: &mut Wander,
    config: &EngineConfig,
    rng: &mut ChaCha8Rng,
) -> Option<Vec2> {
    if binding.target.is_some() {
        return binding.pursue;
    }

    let max_x = (config.canvas.width - size.x).max(0.0);
    let max_y = (config.canvas.height - size.y).max(0.0);
    let stale = match wander.goal {
        Some(goal) => {
            position.distance_to(goal) <= config.arrive_radius
                || goal.x < 0.0
                || goal.y < 0.0
                || goal.x > max_x
                || goal.y > max_y
        }
        None => true,
    };
    if stale {
        wander.goal = Some(Vec2::new(
            rng.gen_range(0.0..=max_x),
            rng.gen_range(0.0..=max_y),
        ));
        return None;
    }
    wander.goal
}

/// Bounded-step mode: `step = min(distance, speed * dt)` toward the
/// goal, repulsion folded in, total displacement capped at `speed * dt`.
fn step_bounded(
    pos: &mut Position,
    vel: &mut Velocity,
    body: &AgentBody,
    goal: Option<Vec2>,
    repulsion: Vec2,
    config: &EngineConfig,
    dt: f64,
) {
    let mut displacement = Vec2::ZERO;

    if let Some(goal) = goal {
        let delta = goal - pos.0;
        let dist = delta.length();
        if dist > config.arrive_radius {
            displacement += delta.normalized() * dist.min(body.speed * dt);
        }
    }

    displacement += repulsion * dt;
    displacement = displacement.clamped_length(body.speed * dt);

    pos.0 += displacement;
    // No persistent velocity in this mode.
    vel.0 = Vec2::ZERO;
}

/// Force-accumulation mode: pursuit, repulsion, and wander impulses sum
/// into a velocity clamped to the agent's max speed, then integrate.
#[allow(clippy::too_many_arguments)]
fn step_forces(
    pos: &mut Position,
    vel: &mut Velocity,
    body: &AgentBody,
    binding: &Binding,
    goal: Option<Vec2>,
    repulsion: Vec2,
    config: &EngineConfig,
    dt: f64,
    rng: &mut ChaCha8Rng,
) {
    let mut force = repulsion;

    match goal {
        Some(goal) if pos.0.distance_to(goal) > config.arrive_radius => {
            // Accelerate toward the goal, reaching full speed in ~1s.
            force += (goal - pos.0).normalized() * body.speed;
        }
        Some(_) => {
            // Sitting on the goal: bleed off speed instead of orbiting.
            vel.0 = vel.0 * (1.0 - (ARRIVE_DAMPING * dt).min(1.0));
        }
        None => {}
    }

    // Idle drift: a capped-magnitude random impulse.
    if binding.target.is_none() {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let magnitude = rng.gen_range(0.0..=config.wander_impulse);
        force += Vec2::new(angle.cos(), angle.sin()) * magnitude;
    }

    vel.0 += force * dt;
    vel.0 = vel.0.clamped_length(body.speed);
    pos.0 += vel.0 * dt;
}

/// Pairwise inverse-square repulsion among visible agents, in pool
/// order. Push magnitude is `repel_force / d²` (px/s), with `d` floored
/// to keep near-coincident agents finite; exactly coincident pairs get
/// a deterministic axis push so they still separate.
fn compute_repulsion(world: &mut World, pool: &[Entity], config: &EngineConfig) -> Vec<Vec2> {
    let mut centers: Vec<Option<Vec2>> = Vec::with_capacity(pool.len());
    for &entity in pool {
        match world.query_one_mut::<(&Position, &AgentBody, &Binding)>(entity) {
            Ok((pos, body, binding)) if binding.visible => {
                centers.push(Some(pos.0 + body.size * 0.5));
            }
            _ => centers.push(None),
        }
    }

    let mut pushes = vec![Vec2::ZERO; pool.len()];
    for i in 0..pool.len() {
        let Some(a) = centers[i] else { continue };
        for j in (i + 1)..pool.len() {
            let Some(b) = centers[j] else { continue };
            let delta = a - b;
            let dist = delta.length();
            if dist >= config.repel_distance {
                continue;
            }
            let dir = if dist > 1e-9 {
                delta * (1.0 / dist)
            } else {
                Vec2::new(1.0, 0.0)
            };
            let floored = dist.max(REPEL_DISTANCE_FLOOR);
            let magnitude = config.repel_force / (floored * floored);
            pushes[i] += dir * magnitude;
            pushes[j] += dir * (-magnitude);
        }
    }
    pushes
}

/// Keep `0 <= pos <= canvas - size` on both axes, clamping or
/// reflecting per configuration.
fn apply_boundary(pos: &mut Position, vel: &mut Velocity, size: Vec2, config: &EngineConfig) {
    let max_x = (config.canvas.width - size.x).max(0.0);
    let max_y = (config.canvas.height - size.y).max(0.0);

    match config.boundary_mode {
        BoundaryMode::Clamp => {
            if pos.0.x < 0.0 || pos.0.x > max_x {
                pos.0.x = pos.0.x.clamp(0.0, max_x);
                vel.0.x = 0.0;
            }
            if pos.0.y < 0.0 || pos.0.y > max_y {
                pos.0.y = pos.0.y.clamp(0.0, max_y);
                vel.0.y = 0.0;
            }
        }
        BoundaryMode::Reflect => {
            if pos.0.x < 0.0 {
                pos.0.x = -pos.0.x;
                vel.0.x = -vel.0.x;
            } else if pos.0.x > max_x {
                pos.0.x = 2.0 * max_x - pos.0.x;
                vel.0.x = -vel.0.x;
            }
            if pos.0.y < 0.0 {
                pos.0.y = -pos.0.y;
                vel.0.y = -vel.0.y;
            } else if pos.0.y > max_y {
                pos.0.y = 2.0 * max_y - pos.0.y;
                vel.0.y = -vel.0.y;
            }
            // A step larger than the canvas could reflect past the far
            // edge; settle on the boundary in that case.
            pos.0.x = pos.0.x.clamp(0.0, max_x);
            pos.0.y = pos.0.y.clamp(0.0, max_y);
        }
    }
}
