use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HelpOverlayProps {
    pub show: bool,
    pub on_close: Callback<()>,
}

#[function_component(HelpOverlay)]
pub fn help_overlay(props: &HelpOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:24px 32px; border-radius:14px; max-width:460px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4; z-index:20;">
            <h2 style="margin:0 0 12px 0; font-size:20px; color:#58a6ff; text-align:center;">{"SVG Playground"}</h2>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Type SVG markup and CSS in the editor on the right."}</li>
                <li>{"Press Ctrl+S (Cmd+S on macOS) or Run to render it."}</li>
                <li>{"Scroll to zoom around the cursor; pinch with two fingers on touch screens."}</li>
                <li>{"Drag the preview with the left mouse button or one finger to pan."}</li>
                <li>{"Drag the bar between the panes to resize them."}</li>
                <li>{"Reset restores the starting viewBox."}</li>
            </ul>
            <div style="display:flex; justify-content:center; margin-top:8px;">
                <button onclick={close}>{"Close"}</button>
            </div>
        </div>
    }
}
