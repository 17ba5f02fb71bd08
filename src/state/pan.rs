// Click/touch drag pan session
use super::viewport::{Point, ScreenTransform, Viewport};

#[derive(Debug, Clone, PartialEq)]
pub struct PanSession {
    pub anchor_local: Point,
    pub origin: Viewport,
    /// Screen → local mapping captured at pointer-down; reused for every move so the
    /// content under the pointer stays put while the viewBox changes.
    pub to_local: ScreenTransform,
}

impl PanSession {
    /// `None` when the local → screen transform cannot be inverted.
    pub fn begin(screen: Point, origin: Viewport, ctm: &ScreenTransform) -> Option<Self> {
        let to_local = ctm.inverse()?;
        Some(Self {
            anchor_local: to_local.apply(screen),
            origin,
            to_local,
        })
    }

    pub fn viewport_at(&self, screen: Point) -> Viewport {
        let now = self.to_local.apply(screen);
        self.origin
            .translated(-(now.x - self.anchor_local.x), -(now.y - self.anchor_local.y))
    }

    /// Session continuing from `next`, which is `current` zoomed by `factor` about the
    /// local point `anchor`. Whatever lies under the pointer after the zoom is what the
    /// drag carries from then on.
    pub fn rebased(
        &self,
        current: &Viewport,
        anchor: Point,
        factor: f64,
        next: Viewport,
    ) -> Self {
        let t = &self.to_local;
        // Live screen → local mapping is the captured one shifted by the pan so far,
        // then scaled about the anchor.
        let shift_x = current.x - self.origin.x;
        let shift_y = current.y - self.origin.y;
        let to_local = ScreenTransform {
            a: t.a * factor,
            b: t.b * factor,
            c: t.c * factor,
            d: t.d * factor,
            e: (t.e + shift_x) * factor + anchor.x * (1.0 - factor),
            f: (t.f + shift_y) * factor + anchor.y * (1.0 - factor),
        };
        Self {
            anchor_local: Point::new(
                anchor.x + (self.anchor_local.x - anchor.x) * factor,
                anchor.y + (self.anchor_local.y - anchor.y) * factor,
            ),
            origin: next,
            to_local,
        }
    }
}
