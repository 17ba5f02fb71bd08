//! Gesture state machine that owns the preview viewport.
//!
//! Every method takes screen points plus the surface's current local → screen transform
//! and returns `true` when the viewport changed, so callers only touch the DOM when needed.

use super::pan::PanSession;
use super::touch::PinchSession;
use super::viewport::{Point, ScreenTransform, Viewport, ViewportLimits};

pub const DEFAULT_ZOOM_STEP: f64 = 0.95;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Panning(PanSession),
    Pinching(PinchSession),
}

#[derive(Debug, Clone)]
pub struct ViewportController {
    viewport: Viewport,
    home: Viewport,
    limits: ViewportLimits,
    /// Size multiplier for one zoom-in step; zoom-out uses its reciprocal.
    zoom_step: f64,
    gesture: Gesture,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(Viewport::default(), ViewportLimits::default(), DEFAULT_ZOOM_STEP)
    }
}

impl ViewportController {
    pub fn new(home: Viewport, limits: ViewportLimits, zoom_step: f64) -> Self {
        let home = if home.is_valid() { home } else { Viewport::default() };
        let zoom_step = if zoom_step > 0.0 && zoom_step < 1.0 {
            zoom_step
        } else {
            DEFAULT_ZOOM_STEP
        };
        Self {
            viewport: home,
            home,
            limits,
            zoom_step,
            gesture: Gesture::Idle,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[cfg(test)]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.gesture, Gesture::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.gesture, Gesture::Panning(_))
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self.gesture, Gesture::Pinching(_))
    }

    fn set(&mut self, next: Viewport) -> bool {
        if !next.is_valid() || next == self.viewport {
            return false;
        }
        self.viewport = next;
        true
    }

    /// Size factor for a wheel tick: up zooms in, down zooms out, zero is ignored.
    pub fn wheel_factor(&self, delta_y: f64) -> Option<f64> {
        if delta_y < 0.0 {
            Some(self.zoom_step)
        } else if delta_y > 0.0 {
            Some(1.0 / self.zoom_step)
        } else {
            None
        }
    }

    /// Anchored zoom about a local-space point. A running pan follows the new scale; a
    /// running pinch ends, since its snapshot no longer matches what is on screen.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) -> bool {
        let factor = self.limits.limit_factor(&self.viewport, factor);
        let current = self.viewport;
        if !self.set(current.zoomed_about(anchor, factor)) {
            return false;
        }
        self.gesture = match std::mem::take(&mut self.gesture) {
            Gesture::Panning(session) => {
                Gesture::Panning(session.rebased(&current, anchor, factor, self.viewport))
            }
            Gesture::Pinching(_) | Gesture::Idle => Gesture::Idle,
        };
        true
    }

    pub fn wheel(&mut self, screen: Point, delta_y: f64, ctm: &ScreenTransform) -> bool {
        let Some(factor) = self.wheel_factor(delta_y) else {
            return false;
        };
        let Some(to_local) = ctm.inverse() else {
            return false;
        };
        self.zoom_about(to_local.apply(screen), factor)
    }

    pub fn zoom_in(&mut self) -> bool {
        self.zoom_about(self.viewport.center(), self.zoom_step)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom_about(self.viewport.center(), 1.0 / self.zoom_step)
    }

    pub fn begin_pan(&mut self, screen: Point, ctm: &ScreenTransform) {
        self.gesture = match PanSession::begin(screen, self.viewport, ctm) {
            Some(session) => Gesture::Panning(session),
            None => Gesture::Idle,
        };
    }

    pub fn pan_to(&mut self, screen: Point) -> bool {
        let next = match &self.gesture {
            Gesture::Panning(session) => session.viewport_at(screen),
            _ => return false,
        };
        self.set(next)
    }

    pub fn begin_pinch(&mut self, first: Point, second: Point, ctm: &ScreenTransform) {
        self.gesture = match ctm.inverse() {
            Some(to_local) => Gesture::Pinching(PinchSession::new(
                first.distance(second),
                to_local.apply(first.midpoint(second)),
                self.viewport,
            )),
            None => Gesture::Idle,
        };
    }

    pub fn pinch_to(&mut self, first: Point, second: Point) -> bool {
        let next = match &self.gesture {
            Gesture::Pinching(session) => {
                session.viewport_at(first.distance(second), &self.limits)
            }
            _ => return false,
        };
        self.set(next)
    }

    /// The set of touching fingers changed: none ends the gesture, one pans, two or more
    /// pinch with the first two. Lifting a finger from a pinch therefore hands over to a pan.
    pub fn touches_changed(&mut self, touches: &[Point], ctm: Option<&ScreenTransform>) {
        match (touches, ctm) {
            ([], _) | (_, None) => self.end_gesture(),
            ([only], Some(ctm)) => self.begin_pan(*only, ctm),
            ([first, second, ..], Some(ctm)) => self.begin_pinch(*first, *second, ctm),
        }
    }

    pub fn end_gesture(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Back to the initial viewport; cancels any running gesture.
    pub fn reset(&mut self) -> bool {
        self.gesture = Gesture::Idle;
        self.set(self.home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: (f64, f64, f64, f64) = (0.0, 0.0, 720.0, 720.0);

    fn ctm_for(view: &Viewport) -> ScreenTransform {
        ScreenTransform::for_viewport(view, SURFACE.0, SURFACE.1, SURFACE.2, SURFACE.3).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn wheel_up_zooms_in_around_pointer() {
        let mut c = ViewportController::default();
        let ctm = ctm_for(&c.viewport());
        assert!(c.wheel(Point::new(360.0, 360.0), -100.0, &ctm));
        let v = c.viewport();
        assert!(approx(v.x, 18.0) && approx(v.y, 18.0));
        assert!(approx(v.width, 684.0) && approx(v.height, 684.0));
    }

    #[test]
    fn wheel_down_then_up_returns_to_start() {
        let mut c = ViewportController::default();
        let pointer = Point::new(100.0, 500.0);
        let ctm = ctm_for(&c.viewport());
        c.wheel(pointer, 3.0, &ctm);
        let ctm = ctm_for(&c.viewport());
        c.wheel(pointer, -3.0, &ctm);
        let v = c.viewport();
        let home = Viewport::default();
        assert!(approx(v.x, home.x) && approx(v.y, home.y));
        assert!(approx(v.width, home.width));
    }

    #[test]
    fn repeated_wheel_zoom_does_not_drift() {
        let mut c = ViewportController::default();
        let pointer = Point::new(250.0, 130.0);
        let anchor = ctm_for(&c.viewport()).inverse().unwrap().apply(pointer);
        for i in 0..40 {
            let ctm = ctm_for(&c.viewport());
            c.wheel(pointer, if i % 3 == 0 { 1.0 } else { -1.0 }, &ctm);
            let screen = ctm_for(&c.viewport()).apply(anchor);
            assert!(approx(screen.x, pointer.x) && approx(screen.y, pointer.y));
        }
    }

    #[test]
    fn zero_wheel_delta_is_ignored() {
        let mut c = ViewportController::default();
        let ctm = ctm_for(&c.viewport());
        assert!(!c.wheel(Point::new(1.0, 1.0), 0.0, &ctm));
        assert_eq!(c.viewport(), Viewport::default());
    }

    #[test]
    fn cumulative_zoom_is_bounded_and_still_anchored() {
        let limits = ViewportLimits {
            min_extent: 100.0,
            max_extent: 2000.0,
        };
        let mut c = ViewportController::new(Viewport::default(), limits, 0.5);
        let anchor = Point::new(200.0, 300.0);
        for _ in 0..10 {
            c.zoom_about(anchor, 0.5);
        }
        assert!(approx(c.viewport().width, 100.0));
        let before = ctm_for(&c.viewport()).apply(anchor);
        for _ in 0..10 {
            c.zoom_about(anchor, 2.0);
        }
        assert!(approx(c.viewport().width, 2000.0));
        let after_view = c.viewport();
        // Anchor stays put relative to the viewport box after clamped zooms.
        let rel_x = (anchor.x - after_view.x) / after_view.width;
        let rel_y = (anchor.y - after_view.y) / after_view.height;
        assert!(approx(rel_x * SURFACE.2, before.x));
        assert!(approx(rel_y * SURFACE.3, before.y));
    }

    #[test]
    fn pan_session_lifecycle() {
        let mut c = ViewportController::default();
        assert!(!c.pan_to(Point::new(5.0, 5.0)));
        let ctm = ctm_for(&c.viewport());
        c.begin_pan(Point::new(100.0, 100.0), &ctm);
        assert!(matches!(c.gesture(), Gesture::Panning(_)));
        assert!(c.pan_to(Point::new(150.0, 80.0)));
        assert_eq!(c.viewport(), Viewport::new(-50.0, 20.0, 720.0, 720.0));
        c.end_gesture();
        assert!(c.is_idle());
        assert!(!c.pan_to(Point::new(0.0, 0.0)));
    }

    #[test]
    fn pinch_scenario_from_gesture_start() {
        let start = Viewport::new(0.0, 0.0, 200.0, 200.0);
        let mut c = ViewportController::new(start, ViewportLimits::default(), 0.95);
        // Identity CTM: screen and local coordinates coincide.
        c.begin_pinch(
            Point::new(50.0, 100.0),
            Point::new(150.0, 100.0),
            &ScreenTransform::IDENTITY,
        );
        assert!(c.pinch_to(Point::new(60.0, 100.0), Point::new(140.0, 100.0)));
        assert!(c.pinch_to(Point::new(75.0, 100.0), Point::new(125.0, 100.0)));
        assert_eq!(c.viewport(), Viewport::new(-100.0, -100.0, 400.0, 400.0));
    }

    #[test]
    fn collapsed_fingers_clamp_instead_of_exploding() {
        let mut c = ViewportController::new(
            Viewport::new(0.0, 0.0, 200.0, 200.0),
            ViewportLimits::default(),
            0.95,
        );
        let p = Point::new(10.0, 10.0);
        c.begin_pinch(p, p, &ScreenTransform::IDENTITY);
        c.pinch_to(p, p);
        assert!(c.viewport().is_valid());
        assert_eq!(c.viewport().width, 200.0);
        c.pinch_to(p, Point::new(10.0, 1e9));
        assert!(c.viewport().is_valid());
        assert!(approx(c.viewport().width, 20.0));
    }

    #[test]
    fn buttons_zoom_about_center_and_reset_restores_home() {
        let mut c = ViewportController::default();
        assert!(c.zoom_in());
        let center = c.viewport().center();
        assert!(approx(center.x, 360.0) && approx(center.y, 360.0));
        assert!(c.zoom_out());
        c.begin_pan(Point::new(0.0, 0.0), &ScreenTransform::IDENTITY);
        c.pan_to(Point::new(30.0, 30.0));
        assert!(c.reset());
        assert!(c.is_idle());
        assert_eq!(c.viewport(), Viewport::default());
        assert!(!c.reset());
    }

    #[test]
    fn invalid_construction_falls_back_to_defaults() {
        let c = ViewportController::new(
            Viewport::new(0.0, 0.0, -1.0, 10.0),
            ViewportLimits::default(),
            4.0,
        );
        assert_eq!(c.viewport(), Viewport::default());
        assert_eq!(c.wheel_factor(-1.0), Some(DEFAULT_ZOOM_STEP));
    }

    #[test]
    fn wheel_during_pan_keeps_zoom_on_next_move() {
        let mut c = ViewportController::default();
        let ctm = ctm_for(&c.viewport());
        c.begin_pan(Point::new(100.0, 100.0), &ctm);
        let ctm = ctm_for(&c.viewport());
        assert!(c.wheel(Point::new(100.0, 100.0), -1.0, &ctm));
        assert!(c.is_panning());
        let zoomed = c.viewport();
        assert!(approx(zoomed.width, 684.0));

        assert!(c.pan_to(Point::new(101.0, 100.0)));
        let v = c.viewport();
        assert!(approx(v.width, 684.0) && approx(v.height, 684.0));
        assert!(approx(v.x, 4.05) && approx(v.y, 5.0));
        // The content grabbed at pointer-down is still under the pointer.
        let grabbed = ctm_for(&v).inverse().unwrap().apply(Point::new(101.0, 100.0));
        assert!(approx(grabbed.x, 100.0) && approx(grabbed.y, 100.0));
    }

    #[test]
    fn wheel_after_partial_pan_rebases_on_live_view() {
        let mut c = ViewportController::default();
        c.begin_pan(Point::new(200.0, 200.0), &ctm_for(&c.viewport()));
        c.pan_to(Point::new(260.0, 170.0));
        let pointer = Point::new(260.0, 170.0);
        let grabbed = ctm_for(&c.viewport()).inverse().unwrap().apply(pointer);
        c.wheel(pointer, 1.0, &ctm_for(&c.viewport()));
        let next = Point::new(230.0, 190.0);
        c.pan_to(next);
        let v = c.viewport();
        assert!(approx(v.width, 720.0 / 0.95));
        let under = ctm_for(&v).inverse().unwrap().apply(next);
        assert!(approx(under.x, grabbed.x) && approx(under.y, grabbed.y));
    }

    #[test]
    fn zoom_ends_a_running_pinch() {
        let mut c = ViewportController::default();
        c.begin_pinch(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            &ScreenTransform::IDENTITY,
        );
        assert!(c.zoom_in());
        assert!(c.is_idle());
        assert!(!c.pinch_to(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
    }

    #[test]
    fn limits_never_reverse_zoom_direction() {
        let tiny = Viewport::new(0.0, 0.0, 0.5, 0.5);
        let mut c = ViewportController::new(tiny, ViewportLimits::default(), 0.95);
        assert!(!c.zoom_in());
        assert_eq!(c.viewport(), tiny);
        assert!(c.zoom_out());
        assert!(c.viewport().width > 0.5);

        let huge = Viewport::new(0.0, 0.0, 5e6, 5e6);
        let mut c = ViewportController::new(huge, ViewportLimits::default(), 0.95);
        assert!(!c.zoom_out());
        assert_eq!(c.viewport(), huge);
        assert!(c.zoom_in());
        assert!(c.viewport().width < 5e6);
    }

    #[test]
    fn lifting_a_finger_hands_pinch_over_to_pan() {
        let mut c = ViewportController::new(
            Viewport::new(0.0, 0.0, 200.0, 200.0),
            ViewportLimits::default(),
            0.95,
        );
        let ctm = ScreenTransform::IDENTITY;
        c.touches_changed(&[Point::new(50.0, 100.0), Point::new(150.0, 100.0)], Some(&ctm));
        assert!(c.is_pinching());
        c.pinch_to(Point::new(75.0, 100.0), Point::new(125.0, 100.0));
        let pinched = c.viewport();
        assert_eq!(pinched, Viewport::new(-100.0, -100.0, 400.0, 400.0));

        let live = ctm_after_pinch(&pinched);
        c.touches_changed(&[Point::new(125.0, 100.0)], Some(&live));
        assert!(c.is_panning());
        assert!(c.pan_to(Point::new(135.0, 100.0)));
        let v = c.viewport();
        assert_eq!(v.width, 400.0);
        assert!(approx(v.x, -120.0) && approx(v.y, -100.0));
    }

    // 200px square surface.
    fn ctm_after_pinch(view: &Viewport) -> ScreenTransform {
        ScreenTransform::for_viewport(view, 0.0, 0.0, 200.0, 200.0).unwrap()
    }

    #[test]
    fn three_fingers_pinch_with_the_first_two() {
        let mut c = ViewportController::default();
        let ctm = ctm_for(&c.viewport());
        let a = Point::new(10.0, 10.0);
        let b = Point::new(110.0, 10.0);
        c.touches_changed(&[a, b, Point::new(300.0, 300.0)], Some(&ctm));
        assert!(c.is_pinching());
        assert!(c.pinch_to(Point::new(35.0, 10.0), Point::new(85.0, 10.0)));
        assert!(approx(c.viewport().width, 1440.0));
        // Anchor is the midpoint of the first two fingers.
        let v = c.viewport();
        assert!(approx(v.x, 60.0 - 60.0 * 2.0) && approx(v.y, 10.0 - 10.0 * 2.0));
    }

    #[test]
    fn touches_changed_ends_without_fingers_or_transform() {
        let mut c = ViewportController::default();
        let ctm = ctm_for(&c.viewport());
        c.touches_changed(&[Point::new(1.0, 1.0)], Some(&ctm));
        assert!(c.is_panning());
        c.touches_changed(&[], Some(&ctm));
        assert!(c.is_idle());
        c.touches_changed(&[Point::new(1.0, 1.0)], None);
        assert!(c.is_idle());
    }
}
