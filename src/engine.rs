use crate::constants::FALLBACK_CLIP_SEC;
use crate::glb::LoadedModel;
use crate::render::{GpuState, MeshBuffers};
use billboard_core::{
    total_clip_duration, BillboardView, Camera, OrbitCamera, OrbitConfig, SceneEngine,
};
use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModelHandle(u32);

struct Spawned {
    handle: ModelHandle,
    position: Vec3,
    mesh: Option<MeshBuffers>,
    triangle_count: usize,
    clip_sec: f32,
    // (start clock, duration) of the running play, if any
    playing: Option<(f64, f32)>,
}

impl Spawned {
    fn transform(&self, clock: f64) -> Mat4 {
        let turn = match self.playing {
            Some((start, dur)) if dur > 0.0 => {
                let t = ((clock - start) as f32 / dur).clamp(0.0, 1.0);
                // ease in/out over one full turn
                let eased = t * t * (3.0 - 2.0 * t);
                eased * std::f32::consts::TAU
            }
            _ => 0.0,
        };
        Mat4::from_rotation_translation(Quat::from_rotation_y(turn), self.position)
    }
}

/// wgpu-backed scene: spawned model instances plus the orbit camera.
///
/// Works without a GPU as well (instances are tracked but not drawn), so a
/// failed WebGPU init still leaves the interaction logic usable.
pub struct WebEngine {
    gpu: Option<GpuState<'static>>,
    orbit: OrbitCamera,
    models: Vec<Spawned>,
    next_handle: u32,
    clock: f64,
}

impl WebEngine {
    pub fn new(gpu: Option<GpuState<'static>>, orbit: OrbitConfig) -> Self {
        Self {
            gpu,
            orbit: OrbitCamera::new(orbit),
            models: Vec::new(),
            next_handle: 0,
            clock: 0.0,
        }
    }

    /// Seconds of scene time since start.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn orbit_mut(&mut self) -> &mut OrbitCamera {
        &mut self.orbit
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        self.orbit.camera(aspect)
    }

    /// Aspect of the drawing surface, or of the given fallback size without a GPU.
    pub fn aspect_or(&self, width: u32, height: u32) -> f32 {
        match &self.gpu {
            Some(g) => g.aspect(),
            None => width as f32 / height.max(1) as f32,
        }
    }

    /// Advance scene time, orbit auto-rotation and finished animations.
    pub fn update(&mut self, dt_sec: f32) {
        self.clock += dt_sec as f64;
        self.orbit.update(dt_sec);
        let clock = self.clock;
        for m in &mut self.models {
            if let Some((start, dur)) = m.playing {
                if clock - start >= dur as f64 {
                    m.playing = None;
                }
            }
        }
    }

    pub fn render(&mut self, camera: &Camera, billboards: &[BillboardView], width: u32, height: u32) {
        let clock = self.clock;
        let Some(gpu) = &mut self.gpu else {
            return;
        };
        gpu.resize_if_needed(width, height);
        let draws: Vec<(&MeshBuffers, Mat4)> = self
            .models
            .iter()
            .filter_map(|m| m.mesh.as_ref().map(|b| (b, m.transform(clock))))
            .collect();
        if let Err(e) = gpu.render(camera, &draws, billboards) {
            log::error!("render error: {:?}", e);
        }
    }

    fn find(&self, handle: ModelHandle) -> Option<&Spawned> {
        self.models.iter().find(|m| m.handle == handle)
    }

    fn find_mut(&mut self, handle: ModelHandle) -> Option<&mut Spawned> {
        self.models.iter_mut().find(|m| m.handle == handle)
    }
}

impl SceneEngine for WebEngine {
    type Model = LoadedModel;
    type Handle = ModelHandle;

    fn spawn(&mut self, model: LoadedModel, position: Vec3) -> ModelHandle {
        let handle = ModelHandle(self.next_handle);
        self.next_handle += 1;
        let mesh = self.gpu.as_ref().map(|g| g.upload_mesh(&model));
        let clip_sec = match total_clip_duration(&model.clip_durations) {
            d if d > 0.0 => d,
            _ => FALLBACK_CLIP_SEC,
        };
        self.models.push(Spawned {
            handle,
            position,
            mesh,
            triangle_count: model.indices.len() / 3,
            clip_sec,
            playing: None,
        });
        handle
    }

    fn despawn(&mut self, handle: ModelHandle) {
        self.models.retain(|m| m.handle != handle);
    }

    fn set_position(&mut self, handle: ModelHandle, position: Vec3) {
        if let Some(m) = self.find_mut(handle) {
            m.position = position;
        }
    }

    fn is_renderable(&self, handle: ModelHandle) -> bool {
        self.find(handle).is_some_and(|m| m.triangle_count > 0)
    }

    fn animation_duration(&self, handle: ModelHandle) -> f32 {
        self.find(handle).map_or(0.0, |m| m.clip_sec)
    }

    fn play_animation(&mut self, handle: ModelHandle) {
        let clock = self.clock;
        if let Some(m) = self.find_mut(handle) {
            m.playing = Some((clock, m.clip_sec));
        }
    }

    fn reset_camera_orbit(&mut self) {
        self.orbit.reset();
    }

    fn set_auto_rotate(&mut self, enabled: bool) {
        self.orbit.set_auto_rotate(enabled);
    }
}
