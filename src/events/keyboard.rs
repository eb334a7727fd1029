use super::SceneWiring;
use crate::input::{command_for_key, scene_handles_keys_for, KeyCommand};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &SceneWiring) {
    let target_tag = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| el.tag_name());
    if !scene_handles_keys_for(target_tag.as_deref()) {
        return;
    }
    let Some(cmd) = command_for_key(&ev.key()) else {
        return;
    };
    match cmd {
        KeyCommand::AddModel => w.request_add(),
        KeyCommand::RemoveModel => w.request_remove(),
        KeyCommand::TogglePanel => w.toggle_panel(),
        KeyCommand::ResetView => w.reset_view(),
        KeyCommand::Fullscreen => {
            if let Some(doc) = crate::dom::window_document() {
                if doc.fullscreen_element().is_some() {
                    doc.exit_fullscreen();
                } else {
                    _ = w.canvas.request_fullscreen();
                }
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(w: &SceneWiring) {
    if let Some(window) = web::window() {
        let w = w.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
