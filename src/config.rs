//! Playground settings, read once at startup from an inline JSON block:
//!
//! ```html
//! <script id="playground-config" type="application/json">{ "zoom_step": 0.9 }</script>
//! ```
//!
//! Every field is optional; anything missing or unusable falls back to the default.

use serde::Deserialize;

use crate::state::{Viewport, ViewportLimits};
use crate::util::clog;

pub const CONFIG_ELEMENT_ID: &str = "playground-config";

pub const DEFAULT_DOCUMENT: &str = r#"<!--The svg viewbox is set as 0 0 720 720-->

<style>
@keyframes casinoLights {
    to {
    stroke-dashoffset: -26;
    }
}

rect {
    stroke-dasharray: 13 13;
    animation: casinoLights 400ms linear infinite;
}
</style>

<rect
    x="200"
    y="200"
    width="300"
    height="200"
    rx="10"
    fill="none"
    stroke="oklch(0.9 0.25 164)"
    stroke-width="5"
/>"#;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub initial_document: String,
    pub initial_viewport: Viewport,
    /// Viewport size multiplier per zoom-in step, in (0, 1).
    pub zoom_step: f64,
    pub min_extent: f64,
    pub max_extent: f64,
    pub editor_language: String,
    pub editor_theme: String,
    /// Share of the window given to the preview pane at startup.
    pub preview_fraction: f64,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            initial_document: DEFAULT_DOCUMENT.to_string(),
            initial_viewport: Viewport::default(),
            zoom_step: 0.95,
            min_extent: ViewportLimits::default().min_extent,
            max_extent: ViewportLimits::default().max_extent,
            editor_language: "html".into(),
            editor_theme: "vs-dark".into(),
            preview_fraction: 0.5,
        }
    }
}

impl PlaygroundConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let cfg: PlaygroundConfig = serde_json::from_str(raw)?;
        Ok(cfg.sanitized())
    }

    /// Replaces out-of-range values with defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = PlaygroundConfig::default();
        if !(self.zoom_step > 0.0 && self.zoom_step < 1.0) {
            self.zoom_step = defaults.zoom_step;
        }
        if !self.initial_viewport.is_valid() {
            self.initial_viewport = defaults.initial_viewport;
        }
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(self.min_extent) {
            self.min_extent = defaults.min_extent;
        }
        if !usable(self.max_extent) {
            self.max_extent = defaults.max_extent;
        }
        if self.min_extent > self.max_extent {
            std::mem::swap(&mut self.min_extent, &mut self.max_extent);
        }
        if !self.preview_fraction.is_finite() {
            self.preview_fraction = defaults.preview_fraction;
        }
        self.preview_fraction = self.preview_fraction.clamp(
            crate::state::resize::MIN_PANE_FRACTION,
            crate::state::resize::MAX_PANE_FRACTION,
        );
        self
    }

    pub fn limits(&self) -> ViewportLimits {
        ViewportLimits {
            min_extent: self.min_extent,
            max_extent: self.max_extent,
        }
    }

    /// Reads the inline config block; defaults when absent or unparsable.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return PlaygroundConfig::default();
        };
        if raw.trim().is_empty() {
            return PlaygroundConfig::default();
        }
        match PlaygroundConfig::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                clog(&format!("playground config ignored: {}", err));
                PlaygroundConfig::default()
            }
        }
    }
}
