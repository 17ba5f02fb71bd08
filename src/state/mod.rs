pub mod controller;
pub mod pan;
pub mod resize;
pub mod touch;
pub mod viewport;

pub use controller::ViewportController;
pub use resize::{PaneWidths, ResizeSession};
pub use viewport::{Point, ScreenTransform, Viewport, ViewportLimits};
