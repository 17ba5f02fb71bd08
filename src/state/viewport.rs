//! Visible region of the preview surface and the local/screen mapping around it.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A `viewBox` rectangle in the surface's local coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 720.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Finite origin and a finite, strictly positive size.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Scales the size by `factor` while `anchor` keeps its position on screen.
    pub fn zoomed_about(&self, anchor: Point, factor: f64) -> Viewport {
        Viewport {
            x: anchor.x - (anchor.x - self.x) * factor,
            y: anchor.y - (anchor.y - self.y) * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Viewport {
        Viewport {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Attribute form, `"x y width height"`.
    pub fn to_view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            trim_float(self.x),
            trim_float(self.y),
            trim_float(self.width),
            trim_float(self.height)
        )
    }

    /// Parses a `viewBox` attribute; separators may be whitespace and/or commas.
    pub fn parse_view_box(raw: &str) -> Option<Viewport> {
        let mut parts = raw
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>());
        let x = parts.next()?.ok()?;
        let y = parts.next()?.ok()?;
        let width = parts.next()?.ok()?;
        let height = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        let vb = Viewport::new(x, y, width, height);
        vb.is_valid().then_some(vb)
    }
}

// Rounds away float noise like 18.000000000000004 so the attribute stays readable.
fn trim_float(v: f64) -> String {
    let rounded = (v * 1e6).round() / 1e6;
    if rounded == 0.0 {
        return "0".into();
    }
    format!("{}", rounded)
}

/// Bounds on viewport width and height applied to every zoom path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportLimits {
    pub min_extent: f64,
    pub max_extent: f64,
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self {
            min_extent: 1.0,
            max_extent: 1_000_000.0,
        }
    }
}

impl ViewportLimits {
    /// Narrows `factor` so that `view` scaled by it stays inside the limits.
    /// Returns 1.0 when no admissible factor exists, the input is degenerate, or the
    /// clamp would turn a zoom-in into a zoom-out (or the reverse) because `view` is
    /// already outside the limits.
    pub fn limit_factor(&self, view: &Viewport, factor: f64) -> f64 {
        if !factor.is_finite() || factor <= 0.0 || !view.is_valid() {
            return 1.0;
        }
        let lo = (self.min_extent / view.width).max(self.min_extent / view.height);
        let hi = (self.max_extent / view.width).min(self.max_extent / view.height);
        if !(lo <= hi) {
            return 1.0;
        }
        let limited = factor.clamp(lo, hi);
        if (factor < 1.0 && limited > 1.0) || (factor > 1.0 && limited < 1.0) {
            return 1.0;
        }
        limited
    }
}

/// Affine local → screen mapping laid out like an SVG matrix:
/// `screen = (a*x + c*y + e, b*x + d*y + f)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl ScreenTransform {
    #[cfg(test)]
    pub const IDENTITY: ScreenTransform = ScreenTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    pub fn inverse(&self) -> Option<ScreenTransform> {
        let det = self.a * self.d - self.b * self.c;
        if !det.is_finite() || det.abs() < f64::EPSILON {
            return None;
        }
        let inv = ScreenTransform {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        };
        Some(inv)
    }

    /// The mapping a browser uses for `preserveAspectRatio="xMidYMid meet"` when `view`
    /// is shown in a box at (`left`, `top`) of `width` x `height` pixels.
    pub fn for_viewport(
        view: &Viewport,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Option<ScreenTransform> {
        if !view.is_valid() || !(width > 0.0) || !(height > 0.0) {
            return None;
        }
        let scale = (width / view.width).min(height / view.height);
        let e = left + (width - view.width * scale) * 0.5 - view.x * scale;
        let f = top + (height - view.height * scale) * 0.5 - view.y * scale;
        Some(ScreenTransform {
            a: scale,
            b: 0.0,
            c: 0.0,
            d: scale,
            e,
            f,
        })
    }
}
