use yew::prelude::*;

use crate::state::Viewport;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewBoxPanelProps {
    pub viewport: Viewport,
    pub home: Viewport,
    pub dirty: bool,
    pub commits: u32,
}

/// Zoom relative to the initial viewport, in percent.
pub fn zoom_percent(home: &Viewport, current: &Viewport) -> f64 {
    if !home.is_valid() || !current.is_valid() {
        return 100.0;
    }
    (home.width / current.width * 100.0).round()
}

#[function_component]
pub fn ViewBoxPanel(props: &ViewBoxPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500; opacity:0.8;";
    let value_style = "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let zoom = zoom_percent(&props.home, &props.viewport);
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; min-width:200px; display:flex; flex-direction:column; gap:6px; font-size:12px; pointer-events:none;">
            <div style={row_style}>
                <span style={label_style}>{"viewBox"}</span>
                <span style={value_style}>{ props.viewport.to_view_box() }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Zoom"}</span>
                <span style={value_style}>{ format!("{}%", zoom) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Runs"}</span>
                <span style={value_style}>{ props.commits }</span>
            </div>
            { if props.dirty {
                html!{ <div style="color:#d29922; font-weight:600;">{"Modified: Ctrl+S to render"}</div> }
            } else { html!{} } }
        </div>
    }
}
