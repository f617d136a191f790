//! Target registry — holds the last committed target set per modality
//! and detects appearance/disappearance across commits.
//!
//! Detector sources commit at their own cadence (typically 50-200 ms),
//! decoupled from the ~16 ms render loop; the registry simply holds
//! whatever was committed last (last-write-wins, idempotent). There is
//! no interpolation here — bounded-step motion in the integrator
//! absorbs the cadence gap.

use std::collections::HashMap;

use swarm_core::enums::Modality;
use swarm_core::events::TargetEvent;
use swarm_core::types::{Target, TargetId};

/// Current working sets, one per modality.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    slots: HashMap<Modality, Vec<Target>>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the working set for one modality. No target persists
    /// across a commit unless its id recurs in the new set. Returns
    /// appearance/disappearance events for the host.
    pub fn commit(&mut self, modality: Modality, targets: Vec<Target>) -> Vec<TargetEvent> {
        let previous = self.slots.insert(modality, targets);
        let current = &self.slots[&modality];
        let previous = previous.unwrap_or_default();

        let mut events = Vec::new();
        for target in current {
            if !previous.iter().any(|p| p.id == target.id) {
                events.push(TargetEvent::TargetAppeared {
                    modality,
                    id: target.id,
                });
            }
        }
        for target in &previous {
            if !current.iter().any(|c| c.id == target.id) {
                events.push(TargetEvent::TargetLost {
                    modality,
                    id: target.id,
                });
            }
        }
        events
    }

    /// The last committed set for a modality (empty if never committed).
    pub fn targets(&self, modality: Modality) -> &[Target] {
        self.slots.get(&modality).map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, modality: Modality, id: TargetId) -> bool {
        self.targets(modality).iter().any(|t| t.id == id)
    }

    /// First modality in priority order holding at least `min_targets`
    /// targets. A failed or absent detector is just an empty slot and
    /// falls through to the next priority.
    pub fn active_modality(&self, priority: &[Modality], min_targets: usize) -> Option<Modality> {
        let floor = min_targets.max(1);
        priority
            .iter()
            .copied()
            .find(|&m| self.targets(m).len() >= floor)
    }

    /// The active modality's working set (empty when nothing claims the pool).
    pub fn active_targets(&self, priority: &[Modality], min_targets: usize) -> &[Target] {
        match self.active_modality(priority, min_targets) {
            Some(modality) => self.targets(modality),
            None => &[],
        }
    }
}
