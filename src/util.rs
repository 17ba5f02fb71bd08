// Small helpers shared by the components

/// Console log; silent off wasm so natively-run tests never reach into JS.
pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    gloo::console::log!(msg);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Ctrl+S, or Cmd+S on macOS.
pub fn is_commit_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && key.eq_ignore_ascii_case("s")
}

pub fn px(value: f64) -> String {
    format!("{}px", value.round())
}
