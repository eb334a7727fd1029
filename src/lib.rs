#![cfg(target_arch = "wasm32")]
use billboard_core::{Controller, SceneConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod engine;
mod events;
mod frame;
mod glb;
mod input;
mod loader;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_scene_buttons(w: &events::SceneWiring) {
    if let Some(doc) = dom::window_document() {
        let w_add = w.clone();
        dom::add_click_listener(&doc, "add-instance", move || w_add.request_add());
        let w_remove = w.clone();
        dom::add_click_listener(&doc, "remove-instance", move || w_remove.request_remove());
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("billboard-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(doc) = dom::window_document() {
                overlay::show_error(&doc, &format!("{:#}", e));
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config = SceneConfig::default();
    let orbit = config.orbit.clone();
    let controller = Controller::new(config).map_err(|e| anyhow::anyhow!("bad scene config: {}", e))?;

    let gpu = frame::init_gpu(&canvas).await;
    let engine = engine::WebEngine::new(gpu, orbit);

    let wiring = events::SceneWiring {
        canvas: canvas.clone(),
        controller: Rc::new(RefCell::new(controller)),
        engine: Rc::new(RefCell::new(engine)),
        loader: loader::GlbLoader,
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    };

    events::wire_input_handlers(&wiring);
    events::wire_global_keydown(&wiring);
    wire_scene_buttons(&wiring);

    // First instance carries the billboard panel
    wiring.request_add();

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller: wiring.controller.clone(),
        engine: wiring.engine.clone(),
        canvas,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
