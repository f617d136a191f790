//! Commands sent from the host (UI layer) to the engine.
//!
//! Commands are queued and applied at the next step boundary, so a
//! resize arriving mid-cycle never tears an integration pass.

use serde::{Deserialize, Serialize};

use crate::enums::{AssignmentPolicy, BoundaryMode, Modality};

/// All host-driven engine mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineCommand {
    /// Canvas was resized; agents are re-clamped into the new bounds.
    SetCanvasSize { width: f64, height: f64 },
    /// Switch the assignment strategy; bindings are recomputed immediately.
    SetAssignmentPolicy { policy: AssignmentPolicy },
    /// Replace the modality precedence order.
    SetModalityPriority { priority: Vec<Modality> },
    /// Switch edge handling.
    SetBoundaryMode { mode: BoundaryMode },
    /// Re-randomize all agent positions (camera-flip gesture).
    ScatterAgents,
}
