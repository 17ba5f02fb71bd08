use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, SvgsvgElement, Touch, TouchEvent, TouchList, WheelEvent};
use yew::prelude::*;

use super::{
    help_overlay::HelpOverlay, view_box_panel::ViewBoxPanel, viewport_controls::ViewportControls,
};
use crate::state::{Point, Viewport, ViewportController, ViewportLimits};
use crate::surface::{RenderSurface, SvgSurface};

#[derive(Properties, PartialEq, Clone)]
pub struct PreviewPaneProps {
    pub svg_ref: NodeRef,
    pub home: Viewport,
    pub limits: ViewportLimits,
    pub zoom_step: f64,
    pub width_style: AttrValue,
    pub dirty: bool,
    pub commits: u32,
    pub on_commit: Callback<()>,
}

fn touch_point(t: &Touch) -> Point {
    Point::new(t.client_x() as f64, t.client_y() as f64)
}

fn mouse_point(e: &MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

fn first_two(list: &TouchList) -> Option<(Point, Point)> {
    Some((touch_point(&list.item(0)?), touch_point(&list.item(1)?)))
}

fn touch_points(list: &TouchList) -> Vec<Point> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| touch_point(&t))
        .collect()
}

#[function_component(PreviewPane)]
pub fn preview_pane(props: &PreviewPaneProps) -> Html {
    let controller =
        use_mut_ref(|| ViewportController::new(props.home, props.limits, props.zoom_step));
    let viewport = use_state(|| controller.borrow().viewport());
    let show_help = use_state(|| false);
    // Window mousemove listener, alive only while a mouse pan is in progress.
    let pan_move = use_mut_ref(|| None::<EventListener>);

    // Push the controller's viewport to the svg attribute and the readout
    let sync_view: Rc<dyn Fn()> = {
        let controller = controller.clone();
        let svg_ref = props.svg_ref.clone();
        let viewport = viewport.clone();
        Rc::new(move || {
            let vp = controller.borrow().viewport();
            if let Some(svg) = svg_ref.cast::<SvgsvgElement>() {
                SvgSurface::new(svg).set_view_box(&vp);
            }
            viewport.set(vp);
        })
    };

    // Mount: gesture listeners on the svg and window
    {
        let svg_ref = props.svg_ref.clone();
        let controller = controller.clone();
        let sync_view = sync_view.clone();
        let pan_move = pan_move.clone();
        use_effect_with((), move |_| {
            let mut listeners: Vec<EventListener> = Vec::new();
            if let (Some(window), Some(svg)) = (web_sys::window(), svg_ref.cast::<SvgsvgElement>())
            {
                let surface = SvgSurface::new(svg.clone());
                surface.set_view_box(&controller.borrow().viewport());

                // Wheel zoom anchored at the cursor
                {
                    let surface = surface.clone();
                    let controller = controller.clone();
                    let sync_view = sync_view.clone();
                    listeners.push(EventListener::new_with_options(
                        &svg,
                        "wheel",
                        EventListenerOptions::enable_prevent_default(),
                        move |e: &Event| {
                            let Some(e) = e.dyn_ref::<WheelEvent>() else {
                                return;
                            };
                            e.prevent_default();
                            let Some(ctm) = surface.screen_transform() else {
                                return;
                            };
                            let changed =
                                controller
                                    .borrow_mut()
                                    .wheel(mouse_point(e), e.delta_y(), &ctm);
                            if changed {
                                sync_view();
                            }
                        },
                    ));
                }

                // Mouse pan: move listener attached on press, dropped on release
                {
                    let surface = surface.clone();
                    let controller = controller.clone();
                    let sync_view = sync_view.clone();
                    let pan_move = pan_move.clone();
                    let window = window.clone();
                    listeners.push(EventListener::new_with_options(
                        &svg,
                        "mousedown",
                        EventListenerOptions::enable_prevent_default(),
                        move |e: &Event| {
                            let Some(e) = e.dyn_ref::<MouseEvent>() else {
                                return;
                            };
                            if e.button() != 0 {
                                return;
                            }
                            e.prevent_default();
                            let Some(ctm) = surface.screen_transform() else {
                                return;
                            };
                            let panning = {
                                let mut c = controller.borrow_mut();
                                c.begin_pan(mouse_point(e), &ctm);
                                c.is_panning()
                            };
                            if !panning {
                                return;
                            }
                            let controller = controller.clone();
                            let sync_view = sync_view.clone();
                            let listener =
                                EventListener::new(&window, "mousemove", move |e: &Event| {
                                    let Some(e) = e.dyn_ref::<MouseEvent>() else {
                                        return;
                                    };
                                    let changed = controller.borrow_mut().pan_to(mouse_point(e));
                                    if changed {
                                        sync_view();
                                    }
                                });
                            *pan_move.borrow_mut() = Some(listener);
                        },
                    ));
                }
                {
                    let controller = controller.clone();
                    let pan_move = pan_move.clone();
                    listeners.push(EventListener::new(&window, "mouseup", move |_e: &Event| {
                        if pan_move.borrow_mut().take().is_some() {
                            let mut c = controller.borrow_mut();
                            if c.is_panning() {
                                c.end_gesture();
                            }
                        }
                    }));
                }

                // Touch: one finger pans, two fingers pinch
                {
                    let surface = surface.clone();
                    let controller = controller.clone();
                    listeners.push(EventListener::new_with_options(
                        &svg,
                        "touchstart",
                        EventListenerOptions::enable_prevent_default(),
                        move |e: &Event| {
                            let Some(e) = e.dyn_ref::<TouchEvent>() else {
                                return;
                            };
                            let touches = touch_points(&e.touches());
                            let mut c = controller.borrow_mut();
                            c.touches_changed(&touches, surface.screen_transform().as_ref());
                            if c.is_pinching() {
                                e.prevent_default();
                            }
                        },
                    ));
                }
                {
                    let controller = controller.clone();
                    let sync_view = sync_view.clone();
                    listeners.push(EventListener::new_with_options(
                        &svg,
                        "touchmove",
                        EventListenerOptions::enable_prevent_default(),
                        move |e: &Event| {
                            let Some(e) = e.dyn_ref::<TouchEvent>() else {
                                return;
                            };
                            let touches = e.touches();
                            let changed = {
                                let mut c = controller.borrow_mut();
                                if c.is_idle() {
                                    return;
                                }
                                e.prevent_default();
                                if c.is_pinching() {
                                    match first_two(&touches) {
                                        Some((a, b)) => c.pinch_to(a, b),
                                        None => false,
                                    }
                                } else if touches.length() == 1 {
                                    match touches.item(0) {
                                        Some(t) => c.pan_to(touch_point(&t)),
                                        None => false,
                                    }
                                } else {
                                    false
                                }
                            };
                            if changed {
                                sync_view();
                            }
                        },
                    ));
                }
                {
                    let surface = surface.clone();
                    let controller = controller.clone();
                    let touch_end = move |e: &Event| {
                        let Some(e) = e.dyn_ref::<TouchEvent>() else {
                            return;
                        };
                        // Lifting one finger of a pinch hands over to a pan
                        let remaining = touch_points(&e.touches());
                        controller
                            .borrow_mut()
                            .touches_changed(&remaining, surface.screen_transform().as_ref());
                    };
                    let touch_end = Rc::new(touch_end);
                    for kind in ["touchend", "touchcancel"] {
                        let touch_end = touch_end.clone();
                        listeners.push(EventListener::new(&svg, kind, move |e: &Event| {
                            touch_end(e)
                        }));
                    }
                }
            }
            move || {
                pan_move.borrow_mut().take();
                drop(listeners);
            }
        });
    }

    let zoom_in_cb: Callback<()> = {
        let controller = controller.clone();
        let sync_view = sync_view.clone();
        Callback::from(move |()| {
            let changed = controller.borrow_mut().zoom_in();
            if changed {
                sync_view();
            }
        })
    };
    let zoom_out_cb: Callback<()> = {
        let controller = controller.clone();
        let sync_view = sync_view.clone();
        Callback::from(move |()| {
            let changed = controller.borrow_mut().zoom_out();
            if changed {
                sync_view();
            }
        })
    };
    let reset_cb: Callback<()> = {
        let controller = controller.clone();
        let sync_view = sync_view.clone();
        let pan_move = pan_move.clone();
        Callback::from(move |()| {
            pan_move.borrow_mut().take();
            let changed = controller.borrow_mut().reset();
            if changed {
                sync_view();
            }
        })
    };
    let toggle_help_cb: Callback<()> = {
        let show_help = show_help.clone();
        Callback::from(move |()| show_help.set(!*show_help))
    };
    let close_help_cb: Callback<()> = {
        let show_help = show_help.clone();
        Callback::from(move |()| show_help.set(false))
    };

    html! {<div id="preview" style={format!("position:relative; flex:none; {} height:100%; overflow:hidden; background:#0e1116;", props.width_style)}>
        <svg
            ref={props.svg_ref.clone()}
            id="svg_content"
            xmlns="http://www.w3.org/2000/svg"
            style="display:block; width:100%; height:100%; touch-action:none; cursor:grab;"
        ></svg>
        <ViewBoxPanel viewport={*viewport} home={props.home} dirty={props.dirty} commits={props.commits} />
        <ViewportControls on_zoom_in={zoom_in_cb} on_zoom_out={zoom_out_cb} on_reset={reset_cb} on_commit={props.on_commit.clone()} on_toggle_help={toggle_help_cb} />
        <HelpOverlay show={*show_help} on_close={close_help_cb} />
    </div>}
}
