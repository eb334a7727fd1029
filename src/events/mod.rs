use crate::engine::{ModelHandle, WebEngine};
use crate::input;
use crate::loader::GlbLoader;
use crate::overlay;
use billboard_core::{AddOutcome, Controller, ModelLoader, RemoveOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_input_handlers;

/// Shared handles every event handler needs.
#[derive(Clone)]
pub struct SceneWiring {
    pub canvas: web::HtmlCanvasElement,
    pub controller: Rc<RefCell<Controller<ModelHandle>>>,
    pub engine: Rc<RefCell<WebEngine>>,
    pub loader: GlbLoader,
    pub drag_state: Rc<RefCell<input::DragState>>,
}

impl SceneWiring {
    pub fn refresh_status(&self) {
        if let Some(doc) = crate::dom::window_document() {
            let ctl = self.controller.borrow();
            overlay::update_status(
                &doc,
                ctl.count(),
                ctl.config().max_instances,
                ctl.panel_state(),
                ctl.is_loading(),
            );
        }
    }

    /// Load one more model and re-center. Borrows are released while the
    /// fetch is pending so input and rendering keep running.
    pub fn request_add(&self) {
        let Ok(pending) = self.controller.borrow_mut().begin_add() else {
            return;
        };
        self.refresh_status();
        let w = self.clone();
        spawn_local(async move {
            let loaded = w.loader.load(pending.path()).await;
            let result = {
                let mut engine = w.engine.borrow_mut();
                w.controller
                    .borrow_mut()
                    .finish_add(pending, loaded, &mut *engine)
            };
            match result {
                Ok(AddOutcome::Added { slot }) => log::info!("[scene] model added at slot {}", slot),
                Ok(other) => log::info!("[scene] add: {:?}", other),
                Err(e) => {
                    log::error!("[scene] add failed: {}", e);
                    if let Some(doc) = crate::dom::window_document() {
                        overlay::show_error(&doc, &format!("Could not load model: {}", e));
                    }
                    return;
                }
            }
            w.refresh_status();
        });
    }

    pub fn request_remove(&self) {
        let result = {
            let mut engine = self.engine.borrow_mut();
            self.controller.borrow_mut().remove_instance(&mut *engine)
        };
        match result {
            Ok(RemoveOutcome::Removed { slot }) => log::info!("[scene] model removed from slot {}", slot),
            Ok(RemoveOutcome::AtMinimum) => {}
            Err(e) => log::error!("[scene] remove failed: {}", e),
        }
        self.refresh_status();
    }

    pub fn toggle_panel(&self) {
        self.controller.borrow_mut().toggle_panel();
        self.refresh_status();
    }

    pub fn reset_view(&self) {
        use billboard_core::SceneEngine;
        self.engine.borrow_mut().reset_camera_orbit();
    }
}
