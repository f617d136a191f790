//! Assignment policy — maps the agent pool onto the current target set.
//!
//! Runs at the assignment cadence (each registry commit), not per
//! render frame, to avoid thrashing. Bindings are recomputed from
//! scratch against the live registry, so an agent whose bound id
//! vanished is rebound or unbound within the same cycle — never left
//! pursuing a stale position.
//!
//! Deterministic policies consume no randomness: re-running against an
//! unchanged target set and unchanged agent positions reproduces the
//! identical binding.

use hecs::{Entity, World};

use swarm_core::components::{AgentBody, Binding, Position};
use swarm_core::config::EngineConfig;
use swarm_core::enums::{AssignmentPolicy, IdleBehavior, TargetKind};
use swarm_core::types::{Target, TargetId, Vec2};

use crate::registry::TargetRegistry;

/// Recompute all agent→target bindings for the current cycle.
pub fn run(world: &mut World, pool: &[Entity], registry: &TargetRegistry, config: &EngineConfig) {
    let targets =
        registry.active_targets(&config.modality_priority, config.modality_min_targets);

    // Agent centers, needed by the nearest policy and pursue offsets.
    let mut bodies: Vec<(Vec2, Vec2)> = Vec::with_capacity(pool.len());
    for &entity in pool {
        if let Ok((pos, body)) = world.query_one_mut::<(&Position, &AgentBody)>(entity) {
            bodies.push((pos.0 + body.size * 0.5, body.size));
        } else {
            bodies.push((Vec2::ZERO, Vec2::ZERO));
        }
    }

    let plan = match config.assignment_policy {
        AssignmentPolicy::OneToOne => plan_one_to_one(targets, pool.len()),
        AssignmentPolicy::Nearest => plan_nearest(targets, &bodies),
        AssignmentPolicy::Perimeter => plan_perimeter(targets, pool.len(), config),
        AssignmentPolicy::RoundRobin => plan_round_robin(targets, pool.len()),
    };

    let idle_visible = config.idle_behavior == IdleBehavior::Wander;
    for (i, &entity) in pool.iter().enumerate() {
        let Ok(binding) = world.query_one_mut::<&mut Binding>(entity) else {
            continue;
        };
        match plan[i] {
            Some((id, goal_center)) => {
                let size = bodies[i].1;
                *binding = Binding {
                    target: Some(id),
                    pursue: Some(clamp_pursue(goal_center - size * 0.5, size, config)),
                    visible: true,
                };
            }
            None => {
                *binding = Binding {
                    target: None,
                    pursue: None,
                    visible: idle_visible,
                };
            }
        }
    }
}

/// Agent i pursues target i; leftover agents idle.
fn plan_one_to_one(targets: &[Target], pool_len: usize) -> Vec<Option<(TargetId, Vec2)>> {
    (0..pool_len)
        .map(|i| targets.get(i).map(|t| (t.id, t.position)))
        .collect()
}

/// Agent i pursues target (i mod count); every agent gets some target.
fn plan_round_robin(targets: &[Target], pool_len: usize) -> Vec<Option<(TargetId, Vec2)>> {
    if targets.is_empty() {
        return vec![None; pool_len];
    }
    (0..pool_len)
        .map(|i| {
            let t = &targets[i % targets.len()];
            Some((t.id, t.position))
        })
        .collect()
}

/// Each agent pursues its Euclidean-nearest target; ties break to the
/// first target in list order (strict less-than keeps the earlier one).
fn plan_nearest(targets: &[Target], bodies: &[(Vec2, Vec2)]) -> Vec<Option<(TargetId, Vec2)>> {
    bodies
        .iter()
        .map(|&(center, _)| {
            let mut best: Option<(TargetId, Vec2, f64)> = None;
            for target in targets {
                let dist = center.distance_to(target.position);
                if best.map_or(true, |(_, _, d)| dist < d) {
                    best = Some((target.id, target.position, dist));
                }
            }
            best.map(|(id, point, _)| (id, point))
        })
        .collect()
}

/// Up to `max_agents_per_target` agents spread evenly along each box
/// target's perimeter at arc-length intervals, walking
/// top → right → bottom → left. Point targets take a single agent.
/// Agents beyond total target capacity fall back to idle.
fn plan_perimeter(
    targets: &[Target],
    pool_len: usize,
    config: &EngineConfig,
) -> Vec<Option<(TargetId, Vec2)>> {
    let mut plan = vec![None; pool_len];
    let mut next_agent = 0;

    for target in targets {
        if next_agent >= pool_len {
            break;
        }
        let remaining = pool_len - next_agent;
        let allotted = match target.kind {
            TargetKind::Box => config.max_agents_per_target.min(remaining),
            TargetKind::Point => 1,
        };
        let perimeter = target.perimeter();
        for k in 0..allotted {
            let point = target.perimeter_point(k as f64 * perimeter / allotted as f64);
            plan[next_agent] = Some((target.id, point));
            next_agent += 1;
        }
    }
    plan
}

/// Keep a pursue point reachable: the whole footprint stays on canvas.
fn clamp_pursue(goal: Vec2, size: Vec2, config: &EngineConfig) -> Vec2 {
    Vec2::new(
        goal.x.clamp(0.0, (config.canvas.width - size.x).max(0.0)),
        goal.y.clamp(0.0, (config.canvas.height - size.y).max(0.0)),
    )
}
