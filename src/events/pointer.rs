use super::SceneWiring;
use crate::constants::WHEEL_ZOOM_PER_PIXEL;
use crate::input;
use billboard_core::ClickOutcome;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(w: &SceneWiring) {
    wire_pointerdown(w);
    wire_pointermove(w);
    wire_pointerup(w);
    wire_click(w);
    wire_wheel(w);
}

fn wire_pointerdown(w: &SceneWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_client(&ev);
        w.controller.borrow_mut().pointer_down(pos);
        {
            let mut ds = w.drag_state.borrow_mut();
            ds.active = true;
            ds.last = pos;
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &SceneWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_client(&ev);
        let delta = {
            let mut ds = w.drag_state.borrow_mut();
            if !ds.active {
                return;
            }
            let d = pos - ds.last;
            ds.last = pos;
            d
        };
        if delta != glam::Vec2::ZERO {
            w.engine.borrow_mut().orbit_mut().drag(delta);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &SceneWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_client(&ev);
        w.drag_state.borrow_mut().active = false;
        w.controller.borrow_mut().pointer_up(pos);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_click(w: &SceneWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let ndc = input::pointer_ndc(&ev, &w.canvas);
        let outcome = {
            let mut engine = w.engine.borrow_mut();
            let aspect = engine.aspect_or(w.canvas.width(), w.canvas.height());
            let camera = engine.camera(aspect);
            let now = engine.clock();
            w.controller
                .borrow_mut()
                .click(&camera, ndc, now, &mut *engine)
        };
        match outcome {
            ClickOutcome::Button { .. } => {
                w.refresh_status();
                ev.prevent_default();
            }
            ClickOutcome::AnimationBusy { slot } => {
                log::info!("[click] slot {} still animating", slot);
            }
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);
    // capture phase, so buttons resolve before anything else sees the click
    _ = canvas_for_listener.add_event_listener_with_callback_and_bool(
        "click",
        closure.as_ref().unchecked_ref(),
        true,
    );
    closure.forget();
}

fn wire_wheel(w: &SceneWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let factor = input::wheel_zoom_factor(ev.delta_y() as f32, WHEEL_ZOOM_PER_PIXEL);
        w.engine.borrow_mut().orbit_mut().zoom(factor);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
