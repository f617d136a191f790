//! Target normalizer — converts heterogeneous detector output into the
//! canonical `Target` representation, in canvas coordinates.
//!
//! Malformed detections (non-finite coordinates, degenerate boxes) are
//! dropped here, before the registry: a single NaN position would
//! silently corrupt every repulsion computation touching it.

use swarm_core::enums::Modality;
use swarm_core::types::{FrameSize, Target, TargetId, Vec2};

/// One raw detection as a detector source reports it, in the source's
/// own coordinate space.
#[derive(Debug, Clone, Copy)]
pub enum RawDetection {
    /// Bounding box, top-left origin.
    Box {
        /// Detector-native track id, when the source provides one.
        track_id: Option<u64>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Landmark / keypoint / centroid.
    Point {
        track_id: Option<u64>,
        x: f64,
        y: f64,
    },
}

/// A batch of detections from one modality's update cycle. Detectors
/// never mutate prior batches; each cycle replaces the working set.
#[derive(Debug, Clone)]
pub struct DetectionBatch {
    pub modality: Modality,
    /// Dimensions of the space `detections` are expressed in (the
    /// video frame, or the unit square for normalized 0..1 output).
    pub source: FrameSize,
    pub detections: Vec<RawDetection>,
}

impl DetectionBatch {
    pub fn new(modality: Modality, source: FrameSize, detections: Vec<RawDetection>) -> Self {
        Self {
            modality,
            source,
            detections,
        }
    }

    /// Batch whose coordinates are normalized to 0..1.
    pub fn normalized(modality: Modality, detections: Vec<RawDetection>) -> Self {
        Self::new(modality, FrameSize::unit(), detections)
    }
}

/// Rescale a batch into canvas space, dropping malformed detections.
///
/// Geometry-fallback ids are computed from the rounded canvas-space
/// coordinates when the detector provides no track id.
pub fn normalize(batch: &DetectionBatch, canvas: FrameSize) -> Vec<Target> {
    let (sx, sy) = batch.source.scale_to(canvas);
    if !(sx.is_finite() && sy.is_finite()) {
        return Vec::new();
    }

    batch
        .detections
        .iter()
        .filter_map(|raw| normalize_one(raw, sx, sy))
        .collect()
}

fn normalize_one(raw: &RawDetection, sx: f64, sy: f64) -> Option<Target> {
    match *raw {
        RawDetection::Box {
            track_id,
            x,
            y,
            width,
            height,
        } => {
            if ![x, y, width, height].iter().all(|v| v.is_finite()) {
                return None;
            }
            if width <= 0.0 || height <= 0.0 {
                return None;
            }
            let extent = Vec2::new(width * sx, height * sy);
            let center = Vec2::new(x * sx + extent.x / 2.0, y * sy + extent.y / 2.0);
            let id = match track_id {
                Some(raw_id) => TargetId::from_raw(raw_id),
                None => TargetId::from_geometry(x * sx, y * sy, extent.x, extent.y),
            };
            Some(Target::boxed(id, center, extent))
        }
        RawDetection::Point { track_id, x, y } => {
            if !(x.is_finite() && y.is_finite()) {
                return None;
            }
            let position = Vec2::new(x * sx, y * sy);
            let id = match track_id {
                Some(raw_id) => TargetId::from_raw(raw_id),
                None => TargetId::from_point(position.x, position.y),
            };
            Some(Target::point(id, position))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm_core::enums::TargetKind;

    fn canvas() -> FrameSize {
        FrameSize::new(1280.0, 720.0)
    }

    #[test]
    fn test_box_rescaled_to_canvas_center() {
        // 640x480 video onto a 1280x720 canvas: sx = 2.0, sy = 1.5.
        let batch = DetectionBatch::new(
            Modality::Object,
            FrameSize::new(640.0, 480.0),
            vec![RawDetection::Box {
                track_id: None,
                x: 100.0,
                y: 100.0,
                width: 50.0,
                height: 40.0,
            }],
        );
        let targets = normalize(&batch, canvas());
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].kind, TargetKind::Box);
        assert_eq!(targets[0].position, Vec2::new(250.0, 180.0));
        assert_eq!(targets[0].extent, Some(Vec2::new(100.0, 60.0)));
    }

    #[test]
    fn test_normalized_point_rescaled() {
        let batch = DetectionBatch::normalized(
            Modality::Hand,
            vec![RawDetection::Point {
                track_id: None,
                x: 0.5,
                y: 0.5,
            }],
        );
        let targets = normalize(&batch, canvas());
        assert_eq!(targets[0].position, Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_non_finite_detections_dropped() {
        let batch = DetectionBatch::new(
            Modality::Object,
            canvas(),
            vec![
                RawDetection::Point {
                    track_id: None,
                    x: f64::NAN,
                    y: 10.0,
                },
                RawDetection::Box {
                    track_id: None,
                    x: 0.0,
                    y: 0.0,
                    width: f64::INFINITY,
                    height: 10.0,
                },
                RawDetection::Point {
                    track_id: None,
                    x: 5.0,
                    y: 6.0,
                },
            ],
        );
        let targets = normalize(&batch, canvas());
        assert_eq!(targets.len(), 1);
        assert!(targets[0].position.is_finite());
    }

    #[test]
    fn test_degenerate_boxes_dropped() {
        let batch = DetectionBatch::new(
            Modality::Color,
            canvas(),
            vec![RawDetection::Box {
                track_id: None,
                x: 10.0,
                y: 10.0,
                width: 0.0,
                height: 20.0,
            }],
        );
        assert!(normalize(&batch, canvas()).is_empty());
    }

    #[test]
    fn test_native_track_id_passthrough() {
        let batch = DetectionBatch::new(
            Modality::Object,
            canvas(),
            vec![RawDetection::Box {
                track_id: Some(77),
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 10.0,
            }],
        );
        assert_eq!(normalize(&batch, canvas())[0].id, TargetId(77));
    }

    #[test]
    fn test_geometry_id_stable_between_batches() {
        let make = || {
            DetectionBatch::new(
                Modality::Object,
                canvas(),
                vec![RawDetection::Box {
                    track_id: None,
                    x: 100.0,
                    y: 50.0,
                    width: 80.0,
                    height: 60.0,
                }],
            )
        };
        let a = normalize(&make(), canvas());
        let b = normalize(&make(), canvas());
        assert_eq!(a[0].id, b[0].id);
    }
}
