// Two-finger pinch gesture state
use super::viewport::{Point, Viewport, ViewportLimits};

pub const PINCH_MIN_RATIO: f64 = 0.1;
pub const PINCH_MAX_RATIO: f64 = 10.0;

/// Size ratio for a pinch that started `start_distance` apart and is now `distance` apart.
/// Fingers moving together grow the viewport (zoom out).
pub fn pinch_ratio(start_distance: f64, distance: f64) -> f64 {
    let ratio = start_distance.max(0.0) / distance.max(0.0);
    if ratio.is_nan() {
        return 1.0;
    }
    ratio.clamp(PINCH_MIN_RATIO, PINCH_MAX_RATIO)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PinchSession {
    pub start_distance: f64,
    pub anchor_local: Point,
    pub snapshot: Viewport,
}

impl PinchSession {
    pub fn new(start_distance: f64, anchor_local: Point, snapshot: Viewport) -> Self {
        Self {
            start_distance,
            anchor_local,
            snapshot,
        }
    }

    /// Viewport for the current finger distance, always relative to the snapshot.
    pub fn viewport_at(&self, distance: f64, limits: &ViewportLimits) -> Viewport {
        let ratio = pinch_ratio(self.start_distance, distance);
        let factor = limits.limit_factor(&self.snapshot, ratio);
        self.snapshot.zoomed_about(self.anchor_local, factor)
    }
}
