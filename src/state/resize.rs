// Pane resize drag session
pub const MIN_PANE_FRACTION: f64 = 0.1;
pub const MAX_PANE_FRACTION: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneWidths {
    pub preview: f64,
    pub editor: f64,
}

/// Clamps one pane width into [10%, 90%] of `total`.
pub fn clamp_pane(width: f64, total: f64) -> f64 {
    if !total.is_finite() || total <= 0.0 {
        return width.max(0.0);
    }
    width.clamp(total * MIN_PANE_FRACTION, total * MAX_PANE_FRACTION)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub start_x: f64,
    pub start: PaneWidths,
}

impl ResizeSession {
    pub fn begin(start_x: f64, start: PaneWidths) -> Self {
        Self { start_x, start }
    }

    /// Widths for pointer at `x` with the window `total` pixels wide. The preview grows by
    /// the displacement and the editor shrinks by it, each clamped on its own.
    pub fn widths_at(&self, x: f64, total: f64) -> PaneWidths {
        let diff = x - self.start_x;
        if !diff.is_finite() || !total.is_finite() || total <= 0.0 {
            return self.start;
        }
        PaneWidths {
            preview: clamp_pane(self.start.preview + diff, total),
            editor: clamp_pane(self.start.editor - diff, total),
        }
    }
}
