//! Detector ingestion plumbing.
//!
//! Detector sources run on their own cadence and may suspend awaiting
//! model inference; the engine must never block on them (stale targets
//! are preferred over a stalled render loop). Results arrive through a
//! channel the engine drains without blocking, newest batch per
//! modality winning. `PollGate` enforces the per-modality discipline:
//! at most one in-flight detection request, and no new cycle before
//! the poll interval elapses.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use crate::normalize::DetectionBatch;

/// Sending side handed to detector sources; clone one per detector.
#[derive(Debug, Clone)]
pub struct DetectorHandle {
    tx: Sender<DetectionBatch>,
}

impl DetectorHandle {
    /// Deliver a finished batch. Returns false when the engine side is
    /// gone; the detector should stop polling.
    pub fn deliver(&self, batch: DetectionBatch) -> bool {
        self.tx.send(batch).is_ok()
    }
}

/// Receiving side owned by the engine's host loop.
#[derive(Debug)]
pub struct DetectorInbox {
    rx: Receiver<DetectionBatch>,
}

impl DetectorInbox {
    /// Drain everything queued without blocking. When several batches
    /// from one modality are queued (a slow consumer), only the newest
    /// survives — a superseded result is simply discarded.
    pub fn drain_latest(&self) -> Vec<DetectionBatch> {
        let mut latest: Vec<DetectionBatch> = Vec::new();
        let mut index: HashMap<swarm_core::enums::Modality, usize> = HashMap::new();

        loop {
            match self.rx.try_recv() {
                Ok(batch) => {
                    if let Some(&i) = index.get(&batch.modality) {
                        latest[i] = batch;
                    } else {
                        index.insert(batch.modality, latest.len());
                        latest.push(batch);
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        latest
    }
}

/// Create the detector channel pair.
pub fn detector_channel() -> (DetectorHandle, DetectorInbox) {
    let (tx, rx) = mpsc::channel();
    (DetectorHandle { tx }, DetectorInbox { rx })
}

/// Per-modality polling discipline: a fixed minimum interval between
/// cycle starts, and at most one cycle in flight at a time. Prevents
/// unbounded queuing when inference runs slower than the interval.
#[derive(Debug)]
pub struct PollGate {
    interval: Duration,
    last_start: Option<Instant>,
    in_flight: bool,
}

impl PollGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_start: None,
            in_flight: false,
        }
    }

    /// Try to start a detection cycle at `now`. Refuses while a prior
    /// cycle is still pending or the interval has not elapsed.
    pub fn try_begin(&mut self, now: Instant) -> bool {
        if self.in_flight {
            return false;
        }
        if let Some(start) = self.last_start {
            if now.duration_since(start) < self.interval {
                return false;
            }
        }
        self.last_start = Some(now);
        self.in_flight = true;
        true
    }

    /// Mark the in-flight cycle finished (delivered or discarded).
    /// A detector that errored calls this too — failure degrades to
    /// an empty working set, nothing more.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm_core::enums::Modality;
    use swarm_core::types::FrameSize;

    fn batch(modality: Modality, n: usize) -> DetectionBatch {
        let detections = (0..n)
            .map(|i| crate::normalize::RawDetection::Point {
                track_id: Some(i as u64),
                x: i as f64,
                y: 0.0,
            })
            .collect();
        DetectionBatch::new(modality, FrameSize::new(100.0, 100.0), detections)
    }

    #[test]
    fn test_inbox_newest_batch_per_modality_wins() {
        let (handle, inbox) = detector_channel();
        handle.deliver(batch(Modality::Object, 1));
        handle.deliver(batch(Modality::Hand, 2));
        handle.deliver(batch(Modality::Object, 3));

        let drained = inbox.drain_latest();
        assert_eq!(drained.len(), 2);
        let object = drained
            .iter()
            .find(|b| b.modality == Modality::Object)
            .unwrap();
        assert_eq!(object.detections.len(), 3, "older object batch discarded");
    }

    #[test]
    fn test_inbox_drain_does_not_block_when_empty() {
        let (_handle, inbox) = detector_channel();
        assert!(inbox.drain_latest().is_empty());
    }

    #[test]
    fn test_deliver_fails_after_inbox_dropped() {
        let (handle, inbox) = detector_channel();
        drop(inbox);
        assert!(!handle.deliver(batch(Modality::Object, 1)));
    }

    #[test]
    fn test_gate_refuses_overlapping_cycles() {
        let mut gate = PollGate::new(Duration::from_millis(200));
        let now = Instant::now();
        assert!(gate.try_begin(now));
        // Still pending: refuse even after the interval elapses.
        assert!(!gate.try_begin(now + Duration::from_millis(500)));
        gate.finish();
        assert!(gate.try_begin(now + Duration::from_millis(500)));
    }

    #[test]
    fn test_gate_enforces_interval() {
        let mut gate = PollGate::new(Duration::from_millis(200));
        let now = Instant::now();
        assert!(gate.try_begin(now));
        gate.finish();
        assert!(!gate.try_begin(now + Duration::from_millis(100)));
        assert!(gate.try_begin(now + Duration::from_millis(200)));
    }
}
