use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::editor::TextAreaAdapter;

#[derive(Properties, PartialEq, Clone)]
pub struct EditorPaneProps {
    pub adapter: TextAreaAdapter,
    pub initial: AttrValue,
    pub language: AttrValue,
    pub theme: AttrValue,
    pub width_style: AttrValue,
    /// Emits the full editor text on every input.
    pub on_change: Callback<String>,
}

#[function_component(EditorPane)]
pub fn editor_pane(props: &EditorPaneProps) -> Html {
    let oninput = {
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(ta) = e.target_dyn_into::<HtmlTextAreaElement>() {
                cb.emit(ta.value());
            }
        })
    };
    let (bg, fg) = if props.theme.contains("dark") {
        ("#1e1e1e", "#d4d4d4")
    } else {
        ("#fffffe", "#1e1e1e")
    };
    html! {<div id="container" style={format!("{} height:100%; display:flex; flex-direction:column; background:{};", props.width_style, bg)}>
        <textarea
            ref={props.adapter.node_ref()}
            class={classes!("editor", props.theme.to_string())}
            data-language={props.language.clone()}
            spellcheck="false"
            autocomplete="off"
            value={props.initial.clone()}
            {oninput}
            style={format!("flex:1; resize:none; border:none; outline:none; padding:12px; margin:0; background:{}; color:{}; font-family:Consolas, 'Courier New', monospace; font-size:14px; line-height:1.45; tab-size:4; white-space:pre;", bg, fg)}
        />
    </div>}
}
