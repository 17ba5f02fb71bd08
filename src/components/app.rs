use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, MouseEvent, SvgsvgElement};
use yew::prelude::*;

use super::{editor_pane::EditorPane, preview_pane::PreviewPane};
use crate::config::PlaygroundConfig;
use crate::editor::TextAreaAdapter;
use crate::model::{PlaygroundAction, PlaygroundState};
use crate::state::{PaneWidths, ResizeSession};
use crate::surface::{RenderSurface, SvgSurface, commit};
use crate::util::{clog, is_commit_shortcut, px};

const HANDLE_PX: f64 = 6.0;

fn element_width(id: &str) -> Option<f64> {
    let el = web_sys::window()?.document()?.get_element_by_id(id)?;
    Some(el.get_bounding_client_rect().width())
}

fn window_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| PlaygroundConfig::load());
    let doc = {
        let initial = config.initial_document.clone();
        use_reducer(move || PlaygroundState::with_document(initial))
    };
    let svg_ref = use_node_ref();
    let editor = use_state(TextAreaAdapter::default);
    // None until the first drag; panes then carry explicit pixel widths.
    let panes = use_state(|| None::<PaneWidths>);
    let resize_move = use_mut_ref(|| None::<EventListener>);

    let commit_cb: Callback<()> = {
        let svg_ref = svg_ref.clone();
        let editor = editor.clone();
        let doc = doc.clone();
        Callback::from(move |()| {
            let Some(svg) = svg_ref.cast::<SvgsvgElement>() else {
                clog("commit skipped: preview surface not mounted");
                return;
            };
            let markup = commit(&*editor, &SvgSurface::new(svg));
            clog(&markup);
            doc.dispatch(PlaygroundAction::Committed { markup });
        })
    };

    // Mount: render the starting document, Ctrl+S, end of pane drags
    {
        let svg_ref = svg_ref.clone();
        let commit_cb = commit_cb.clone();
        let resize_move = resize_move.clone();
        let initial = config.initial_document.clone();
        use_effect_with((), move |_| {
            let mut listeners: Vec<EventListener> = Vec::new();
            if let Some(svg) = svg_ref.cast::<SvgsvgElement>() {
                SvgSurface::new(svg).set_content(&initial);
            }
            if let Some(window) = web_sys::window() {
                listeners.push(EventListener::new_with_options(
                    &window,
                    "keydown",
                    EventListenerOptions::enable_prevent_default(),
                    move |e: &Event| {
                        let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if is_commit_shortcut(&e.key(), e.ctrl_key(), e.meta_key()) {
                            e.prevent_default();
                            commit_cb.emit(());
                        }
                    },
                ));
                let resize_move = resize_move.clone();
                listeners.push(EventListener::new(&window, "mouseup", move |_e: &Event| {
                    resize_move.borrow_mut().take();
                }));
            }
            move || {
                resize_move.borrow_mut().take();
                drop(listeners);
            }
        });
    }

    let on_handle_down = {
        let panes = panes.clone();
        let resize_move = resize_move.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let (Some(preview), Some(editor)) = (element_width("preview"), element_width("container"))
            else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let session = ResizeSession::begin(e.client_x() as f64, PaneWidths { preview, editor });
            let panes = panes.clone();
            let listener = EventListener::new(&window, "mousemove", move |e: &Event| {
                let Some(e) = e.dyn_ref::<MouseEvent>() else {
                    return;
                };
                panes.set(Some(session.widths_at(e.client_x() as f64, window_width())));
            });
            *resize_move.borrow_mut() = Some(listener);
        })
    };

    let on_editor_change = {
        let doc = doc.clone();
        Callback::from(move |text: String| {
            doc.dispatch(PlaygroundAction::EditorChanged { text })
        })
    };

    let (preview_style, editor_style) = match *panes {
        Some(w) => (
            format!("width:{};", px(w.preview)),
            format!("width:{};", px(w.editor)),
        ),
        None => {
            let left = config.preview_fraction * 100.0;
            let half_handle = HANDLE_PX / 2.0;
            (
                format!("width:calc({}% - {}px);", left, half_handle),
                format!("width:calc({}% - {}px);", 100.0 - left, half_handle),
            )
        }
    };

    html! {<div id="root" style="display:flex; flex-direction:row; width:100vw; height:100vh; overflow:hidden; background:#0e1116; color:#e6edf3;">
        <PreviewPane
            svg_ref={svg_ref.clone()}
            home={config.initial_viewport}
            limits={config.limits()}
            zoom_step={config.zoom_step}
            width_style={preview_style}
            dirty={doc.dirty}
            commits={doc.commits}
            on_commit={commit_cb.clone()}
        />
        <div
            id="resize"
            onmousedown={on_handle_down}
            style={format!("flex:none; width:{}; height:100%; cursor:col-resize; background:#30363d;", px(HANDLE_PX))}
        ></div>
        <EditorPane
            adapter={(*editor).clone()}
            initial={config.initial_document.clone()}
            language={config.editor_language.clone()}
            theme={config.editor_theme.clone()}
            width_style={format!("flex:none; {}", editor_style)}
            on_change={on_editor_change}
        />
    </div>}
}
