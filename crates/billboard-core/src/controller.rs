use crate::animation::AnimationGate;
use crate::camera::Camera;
use crate::config::{PanelAction, SceneConfig};
use crate::engine::{ModelLoader, SceneEngine};
use crate::error::{ConfigError, ControllerError, EngineError};
use crate::gesture::GestureState;
use crate::hit::{nearest_hit, ray_sphere, ButtonId, Ray};
use crate::marker::{MarkerKind, Panel, PanelState};
use glam::{Quat, Vec2, Vec3};

/// Slot that carries the billboard panel.
pub const ANCHOR_SLOT: usize = 0;

/// One loaded model occupying a layout slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance<H> {
    pub slot: usize,
    pub position: Vec3,
    pub handle: H,
    pub renderable: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added { slot: usize },
    AtCapacity,
    Busy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed { slot: usize },
    AtMinimum,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Pointer moved between down and up.
    Dragged,
    Button {
        button: ButtonId,
        action: Option<PanelAction>,
    },
    Animated {
        slot: usize,
    },
    AnimationBusy {
        slot: usize,
    },
    Missed,
}

/// Proof that an add was admitted; hand it back to [`Controller::finish_add`].
#[derive(Debug)]
#[must_use]
pub struct PendingAdd {
    path: String,
}

impl PendingAdd {
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A marker ready to draw: world placement plus what it represents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BillboardView {
    pub kind: MarkerKind,
    pub button: Option<ButtonId>,
    pub position: Vec3,
    pub rotation: Quat,
    pub size: Vec2,
}

/// Owns the instance stack, the billboard panel and pointer gesture state.
pub struct Controller<H> {
    config: SceneConfig,
    instances: Vec<Instance<H>>,
    panel: Panel,
    gesture: GestureState,
    gate: AnimationGate,
    loading: bool,
}

impl<H: Copy + Eq + std::fmt::Debug> Controller<H> {
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut panel = Panel::new(
            ANCHOR_SLOT,
            &config.button_anchors,
            config.button_size,
            config.ring_size,
        );
        for deco in &config.decorations {
            panel.add_decorative(ANCHOR_SLOT, deco.offset, deco.size);
        }
        let gate = AnimationGate::new(config.animation_cooldown_sec);
        Ok(Self {
            config,
            instances: Vec::new(),
            panel,
            gesture: GestureState::default(),
            gate,
            loading: false,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn instances(&self) -> &[Instance<H>] {
        &self.instances
    }

    pub fn count(&self) -> usize {
        self.instances.len()
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.instances.iter().map(|i| i.position).collect()
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn panel_state(&self) -> PanelState {
        self.panel.state()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // ---------------- Instance lifecycle ----------------

    /// Why an add would be a no-op right now, if it would.
    pub fn add_blocked(&self) -> Option<AddOutcome> {
        if self.loading {
            Some(AddOutcome::Busy)
        } else if self.instances.len() >= self.config.max_instances {
            Some(AddOutcome::AtCapacity)
        } else {
            None
        }
    }

    /// First half of an add: admit it and mark a load as in flight.
    ///
    /// Returns the no-op outcome when the add is refused; see
    /// [`Controller::add_blocked`].
    pub fn begin_add(&mut self) -> Result<PendingAdd, AddOutcome> {
        if let Some(outcome) = self.add_blocked() {
            log::info!("[layout] add skipped: {:?} (count={})", outcome, self.count());
            return Err(outcome);
        }
        self.loading = true;
        Ok(PendingAdd {
            path: self.config.model_path.clone(),
        })
    }

    /// Second half of an add: place the loaded model and re-center everything.
    ///
    /// A failed load leaves the instance stack and layout untouched.
    pub fn finish_add<E>(
        &mut self,
        pending: PendingAdd,
        loaded: Result<E::Model, EngineError>,
        engine: &mut E,
    ) -> Result<AddOutcome, ControllerError>
    where
        E: SceneEngine<Handle = H>,
    {
        self.loading = false;
        let model = match loaded {
            Ok(m) => m,
            Err(e) => {
                log::error!("[load] {} failed: {}", pending.path, e);
                return Err(e.into());
            }
        };
        let slot = self.instances.len();
        let positions = self.config.layout.positions(slot + 1)?;
        let handle = engine.spawn(model, self.config.layout.center);
        let renderable = engine.is_renderable(handle);
        if !renderable {
            log::warn!("[load] {} has nothing to draw; it will not be pickable", pending.path);
        }
        self.instances.push(Instance {
            slot,
            position: self.config.layout.center,
            handle,
            renderable,
        });
        self.apply_layout(engine, &positions);
        engine.reset_camera_orbit();
        log::info!("[layout] added slot {} (count={})", slot, self.count());
        Ok(AddOutcome::Added { slot })
    }

    pub async fn add_instance<L, E>(
        &mut self,
        loader: &L,
        engine: &mut E,
    ) -> Result<AddOutcome, ControllerError>
    where
        L: ModelLoader,
        E: SceneEngine<Handle = H, Model = L::Model>,
    {
        let pending = match self.begin_add() {
            Ok(pending) => pending,
            Err(outcome) => return Ok(outcome),
        };
        let loaded = loader.load(pending.path()).await;
        self.finish_add(pending, loaded, engine)
    }

    /// Remove the most recently added instance.
    pub fn remove_instance<E>(&mut self, engine: &mut E) -> Result<RemoveOutcome, ControllerError>
    where
        E: SceneEngine<Handle = H>,
    {
        let count = self.instances.len();
        if count <= self.config.min_instances {
            log::info!("[layout] remove skipped at minimum (count={})", count);
            return Ok(RemoveOutcome::AtMinimum);
        }
        let positions = self.config.layout.positions(count - 1)?;
        let Some(removed) = self.instances.pop() else {
            return Ok(RemoveOutcome::AtMinimum);
        };
        let detached = self.panel.detach_owned_by(removed.slot);
        if detached > 0 {
            log::info!("[layout] detached {} markers from slot {}", detached, removed.slot);
        }
        engine.despawn(removed.handle);
        self.apply_layout(engine, &positions);
        engine.reset_camera_orbit();
        log::info!("[layout] removed slot {} (count={})", removed.slot, self.count());
        Ok(RemoveOutcome::Removed { slot: removed.slot })
    }

    fn apply_layout<E>(&mut self, engine: &mut E, positions: &[Vec3])
    where
        E: SceneEngine<Handle = H>,
    {
        for (slot, (inst, pos)) in self.instances.iter_mut().zip(positions).enumerate() {
            inst.slot = slot;
            inst.position = *pos;
            engine.set_position(inst.handle, *pos);
        }
    }

    // ---------------- Pointer input ----------------

    pub fn pointer_down(&mut self, client: Vec2) {
        self.gesture.pointer_down(client);
    }

    pub fn pointer_up(&mut self, client: Vec2) {
        self.gesture.pointer_up(client);
    }

    /// Button under `ndc`, ignoring gesture state.
    pub fn hit_button(&self, camera: &Camera, ndc: Vec2) -> Option<ButtonId> {
        let ray = camera.ray_from_ndc(ndc);
        self.panel.hit_test(&ray, |slot| self.instance_position(slot))
    }

    /// Handle a click at `ndc`: buttons win over the model body.
    pub fn click<E>(&mut self, camera: &Camera, ndc: Vec2, now_sec: f64, engine: &mut E) -> ClickOutcome
    where
        E: SceneEngine<Handle = H>,
    {
        if self.gesture.is_drag() {
            return ClickOutcome::Dragged;
        }
        let ray = camera.ray_from_ndc(ndc);
        if let Some(button) = self.panel.hit_test(&ray, |slot| self.instance_position(slot)) {
            let action = self.config.action_for(button);
            log::info!("[click] button {} -> {:?}", button, action);
            match action {
                Some(PanelAction::Close) => self.close_panel(),
                Some(PanelAction::Confirm) => {
                    engine.set_auto_rotate(true);
                    self.panel.attach_decorations();
                    self.close_panel();
                }
                None => {}
            }
            return ClickOutcome::Button { button, action };
        }
        if !self.config.animate_on_click {
            return ClickOutcome::Missed;
        }
        let Some(slot) = self.hit_instance(&ray) else {
            return ClickOutcome::Missed;
        };
        let handle = self.instances[slot].handle;
        let duration = engine.animation_duration(handle) as f64;
        if self.gate.try_start(now_sec, duration) {
            engine.play_animation(handle);
            log::info!("[click] animate slot {} for {:.2}s", slot, duration);
            ClickOutcome::Animated { slot }
        } else {
            ClickOutcome::AnimationBusy { slot }
        }
    }

    fn hit_instance(&self, ray: &Ray) -> Option<usize> {
        let hits = self
            .instances
            .iter()
            .filter(|i| i.renderable)
            .filter_map(|i| {
                let center = i.position + self.config.instance_pick_offset;
                ray_sphere(ray, center, self.config.instance_pick_radius).map(|t| (i.slot, t))
            });
        nearest_hit(hits).map(|(slot, _)| slot)
    }

    fn instance_position(&self, slot: usize) -> Option<Vec3> {
        self.instances.get(slot).map(|i| i.position)
    }

    // ---------------- Panel ----------------

    pub fn close_panel(&mut self) {
        if self.panel.state() == PanelState::Visible {
            self.panel.close();
            log::info!("[panel] hidden");
        }
    }

    pub fn open_panel(&mut self) {
        if self.panel.state() == PanelState::Hidden {
            self.panel.open();
            log::info!("[panel] visible");
        }
    }

    pub fn toggle_panel(&mut self) {
        match self.panel.state() {
            PanelState::Visible => self.close_panel(),
            PanelState::Hidden => self.open_panel(),
        }
    }

    // ---------------- Per frame ----------------

    /// Face every attached marker toward the camera. Call after the camera
    /// has moved for this frame and before drawing it.
    pub fn orient_billboards(&mut self, camera_rotation: Quat) {
        self.panel.orient(camera_rotation);
    }

    /// Attached markers whose owning instance exists, in draw order.
    pub fn billboards(&self) -> Vec<BillboardView> {
        self.panel
            .markers()
            .iter()
            .filter(|m| m.attached)
            .filter_map(|m| {
                let owner = self.instance_position(m.owner)?;
                Some(BillboardView {
                    kind: m.kind,
                    button: m.button,
                    position: m.world_position(owner),
                    rotation: m.rotation,
                    size: m.size,
                })
            })
            .collect()
    }
}
