pub mod app;
pub mod editor_pane;
pub mod help_overlay;
pub mod preview_pane;
pub mod view_box_panel;
pub mod viewport_controls;
