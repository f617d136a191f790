//! Engine snapshot — the complete visible state handed to the renderer
//! each frame. The renderer is a pure consumer and never mutates
//! engine state.

use serde::{Deserialize, Serialize};

use crate::enums::{Modality, TargetKind};
use crate::events::TargetEvent;
use crate::types::{EngineTime, TargetId, Vec2};

/// Per-frame output of the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub time: EngineTime,
    /// Modality currently claiming the pool, if any.
    pub active_modality: Option<Modality>,
    pub agents: Vec<AgentView>,
    /// The active modality's committed target set.
    pub targets: Vec<TargetView>,
    /// Lifecycle events since the last snapshot.
    pub events: Vec<TargetEvent>,
    /// Renderer passthrough (link-line distance); not read by the engine.
    pub link_distance: f64,
}

/// One agent as the renderer sees it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentView {
    /// Stable pool index (spawn order).
    pub index: usize,
    /// Top-left corner of the footprint.
    pub position: Vec2,
    /// Footprint width/height.
    pub size: Vec2,
    pub visible: bool,
    pub bound_target: Option<TargetId>,
}

impl AgentView {
    /// Footprint center, for link lines and labels.
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }
}

/// One target as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub id: TargetId,
    pub kind: TargetKind,
    pub position: Vec2,
    pub extent: Option<Vec2>,
}
