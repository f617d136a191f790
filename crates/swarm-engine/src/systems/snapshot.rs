//! Snapshot builder — flattens the world into the renderer's view.

use hecs::{Entity, World};

use swarm_core::config::EngineConfig;
use swarm_core::enums::Modality;
use swarm_core::events::TargetEvent;
use swarm_core::state::{AgentView, EngineSnapshot, TargetView};
use swarm_core::types::EngineTime;

use swarm_core::components::{AgentBody, Binding, Position};

use crate::registry::TargetRegistry;

/// Build the per-frame snapshot. `events` are the lifecycle events
/// accumulated since the previous snapshot, already drained.
pub fn build(
    world: &mut World,
    pool: &[Entity],
    registry: &TargetRegistry,
    config: &EngineConfig,
    time: EngineTime,
    active_modality: Option<Modality>,
    events: Vec<TargetEvent>,
) -> EngineSnapshot {
    let mut agents = Vec::with_capacity(pool.len());
    for (index, &entity) in pool.iter().enumerate() {
        let Ok((pos, body, binding)) =
            world.query_one_mut::<(&Position, &AgentBody, &Binding)>(entity)
        else {
            continue;
        };
        agents.push(AgentView {
            index,
            position: pos.0,
            size: body.size,
            visible: binding.visible,
            bound_target: binding.target,
        });
    }

    let targets = registry
        .active_targets(&config.modality_priority, config.modality_min_targets)
        .iter()
        .map(|t| TargetView {
            id: t.id,
            kind: t.kind,
            position: t.position,
            extent: t.extent,
        })
        .collect();

    EngineSnapshot {
        time,
        active_modality,
        agents,
        targets,
        events,
        link_distance: config.link_distance,
    }
}
