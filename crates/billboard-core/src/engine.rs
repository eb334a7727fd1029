//! Boundary to the 3D engine.
//!
//! The controller never touches GPU resources or the scene graph directly; it
//! asks a [`SceneEngine`] to spawn, move and remove model instances and a
//! [`ModelLoader`] to fetch the asset. The web frontend implements both on
//! top of wgpu.

use crate::error::EngineError;
use glam::Vec3;

#[allow(async_fn_in_trait)]
pub trait ModelLoader {
    type Model;

    async fn load(&self, path: &str) -> Result<Self::Model, EngineError>;
}

pub trait SceneEngine {
    type Model;
    type Handle: Copy + Eq + std::fmt::Debug;

    /// Add a loaded model to the scene at `position`.
    fn spawn(&mut self, model: Self::Model, position: Vec3) -> Self::Handle;
    fn despawn(&mut self, handle: Self::Handle);
    fn set_position(&mut self, handle: Self::Handle, position: Vec3);

    /// Whether the instance carries drawable geometry; only those are pickable.
    fn is_renderable(&self, handle: Self::Handle) -> bool;

    /// Seconds needed to play every clip of the instance once.
    fn animation_duration(&self, handle: Self::Handle) -> f32;
    fn play_animation(&mut self, handle: Self::Handle);

    fn reset_camera_orbit(&mut self);
    fn set_auto_rotate(&mut self, enabled: bool);
}
