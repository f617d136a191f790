//! Fundamental geometric and timing types.

use serde::{Deserialize, Serialize};

/// 2D vector in canvas space (pixels; x = right, y = down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance to another point.
    pub fn distance_to(&self, other: Vec2) -> f64 {
        (other - *self).length()
    }

    /// Unit vector in this direction, or zero if the length is negligible.
    pub fn normalized(&self) -> Vec2 {
        let len = self.length();
        if len > 1e-9 {
            Vec2::new(self.x / len, self.y / len)
        } else {
            Vec2::ZERO
        }
    }

    /// Same direction, length capped at `max`.
    pub fn clamped_length(&self, max: f64) -> Vec2 {
        let len = self.length();
        if len > max && len > 1e-9 {
            Vec2::new(self.x * max / len, self.y * max / len)
        } else {
            *self
        }
    }

    /// Both coordinates are finite (no NaN, no infinities).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Dimensions of a coordinate space (canvas or detector frame), pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: f64,
    pub height: f64,
}

impl FrameSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The unit square, used for detectors that report normalized 0..1 coordinates.
    pub fn unit() -> Self {
        Self::new(1.0, 1.0)
    }

    /// Per-axis scale factors mapping this space onto `canvas`.
    pub fn scale_to(&self, canvas: FrameSize) -> (f64, f64) {
        (canvas.width / self.width, canvas.height / self.height)
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_CANVAS_WIDTH,
            crate::constants::DEFAULT_CANVAS_HEIGHT,
        )
    }
}

/// Stable identity key for a target across consecutive registry updates.
///
/// Detector-native track ids are wrapped directly. When the detector
/// provides no identity, the id is derived from rounded geometry — two
/// detections with identical rounded coordinates are indistinguishable,
/// and a jittering box reads as a new identity each cycle. That is an
/// accepted, bounded source of assignment churn, not an error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TargetId(pub u64);

impl TargetId {
    /// Wrap a detector-native track id.
    pub fn from_raw(id: u64) -> Self {
        TargetId(id)
    }

    /// Derive an id from rounded box geometry (FNV-1a over the coordinates).
    pub fn from_geometry(x: f64, y: f64, width: f64, height: f64) -> Self {
        const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

        let mut hash = FNV_OFFSET;
        for coord in [x, y, width, height] {
            let rounded = coord.round() as i64;
            for byte in rounded.to_le_bytes() {
                hash ^= byte as u64;
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        }
        TargetId(hash)
    }

    /// Derive an id from a rounded point.
    pub fn from_point(x: f64, y: f64) -> Self {
        Self::from_geometry(x, y, 0.0, 0.0)
    }
}

/// A normalized detection that agents may pursue.
///
/// Always expressed in canvas coordinates; `position` is the
/// representative point (box center, or the point itself).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: TargetId,
    pub kind: crate::enums::TargetKind,
    pub position: Vec2,
    /// Present only for box targets; used for perimeter distribution.
    pub extent: Option<Vec2>,
}

impl Target {
    /// A point target (hand landmark, pose keypoint, color centroid).
    pub fn point(id: TargetId, position: Vec2) -> Self {
        Self {
            id,
            kind: crate::enums::TargetKind::Point,
            position,
            extent: None,
        }
    }

    /// An area target; `position` is the box center.
    pub fn boxed(id: TargetId, center: Vec2, extent: Vec2) -> Self {
        Self {
            id,
            kind: crate::enums::TargetKind::Box,
            position: center,
            extent: Some(extent),
        }
    }

    /// Box perimeter length; zero for point targets.
    pub fn perimeter(&self) -> f64 {
        match self.extent {
            Some(e) => 2.0 * (e.x + e.y),
            None => 0.0,
        }
    }

    /// Point at arc length `s` along the box perimeter, walking
    /// top → right → bottom → left from the top-left corner.
    /// Falls back to the representative point for point targets.
    pub fn perimeter_point(&self, s: f64) -> Vec2 {
        let Some(extent) = self.extent else {
            return self.position;
        };
        let perimeter = self.perimeter();
        if perimeter < 1e-9 {
            return self.position;
        }

        let top_left = self.position - extent * 0.5;
        let (w, h) = (extent.x, extent.y);
        let mut s = s.rem_euclid(perimeter);

        if s < w {
            return Vec2::new(top_left.x + s, top_left.y);
        }
        s -= w;
        if s < h {
            return Vec2::new(top_left.x + w, top_left.y + s);
        }
        s -= h;
        if s < w {
            return Vec2::new(top_left.x + w - s, top_left.y + h);
        }
        s -= w;
        Vec2::new(top_left.x, top_left.y + h - s)
    }
}

/// Engine time tracking, advanced by the clamped frame delta.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EngineTime {
    /// Render frame counter (increments once per integration step).
    pub frame: u64,
    /// Elapsed integrated time in seconds (sum of clamped deltas).
    pub elapsed_secs: f64,
}

impl EngineTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}
