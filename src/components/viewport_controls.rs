use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewportControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_commit: Callback<()>,
    pub on_toggle_help: Callback<()>,
}

#[function_component(ViewportControls)]
pub fn viewport_controls(props: &ViewportControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rs = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let run = {
        let cb = props.on_commit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let help = {
        let cb = props.on_toggle_help.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button onclick={zo} title="Zoom out"> {"-"} </button>
        <button onclick={zi} title="Zoom in"> {"+"} </button>
        <button onclick={rs} title="Reset view"> {"Reset"} </button>
        <span style="width:8px;"></span>
        <button onclick={run} title="Render editor text (Ctrl+S)"> {"Run"} </button>
        <button onclick={help}> {"?"} </button>
    </div>}
}
