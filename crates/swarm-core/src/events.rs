//! Events emitted by the engine for host feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Modality;
use crate::types::TargetId;

/// Target lifecycle events, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TargetEvent {
    /// An id appeared in a registry commit that was absent before.
    TargetAppeared { modality: Modality, id: TargetId },
    /// An id from the previous commit did not recur.
    TargetLost { modality: Modality, id: TargetId },
    /// The pool-claiming modality changed (priority fall-through).
    ModalityChanged {
        from: Option<Modality>,
        to: Option<Modality>,
    },
}
