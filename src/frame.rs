use crate::engine::{ModelHandle, WebEngine};
use crate::render;
use billboard_core::Controller;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub controller: Rc<RefCell<Controller<ModelHandle>>>,
    pub engine: Rc<RefCell<WebEngine>>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        // clamp so a backgrounded tab does not fast-forward animations
        let dt_sec = (now - self.last_instant).as_secs_f32().min(0.1);
        self.last_instant = now;

        let width = self.canvas.width();
        let height = self.canvas.height();
        let mut engine = self.engine.borrow_mut();

        // Camera first, then billboards, then draw: billboards must see this
        // frame's camera or they trail it by one frame.
        engine.update(dt_sec);
        let camera = engine.camera(engine.aspect_or(width, height));
        let billboards = {
            let mut ctl = self.controller.borrow_mut();
            ctl.orient_billboards(camera.rotation());
            ctl.billboards()
        };
        engine.render(&camera, &billboards, width, height);
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
