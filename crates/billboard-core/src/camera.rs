//! Camera description and orbit controls.
//!
//! These types avoid platform-specific APIs. The web frontend builds its view
//! and projection matrices from [`Camera`], casts pick rays through it, and
//! copies [`Camera::rotation`] onto billboards every frame.

use crate::constants::*;
use crate::hit::Ray;
use glam::{Mat4, Quat, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space orientation of the camera (view rotation inverted).
    pub fn rotation(&self) -> Quat {
        Quat::from_mat4(&self.view_matrix().inverse()).normalize()
    }

    /// Ray from the eye through a point in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::new(self.eye, far - self.eye)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    pub target: Vec3,
    pub home_eye: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub rotate_speed: f32,
    pub auto_rotate_speed: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            target: vec3(CAMERA_TARGET),
            home_eye: vec3(CAMERA_EYE),
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            min_polar: 1e-3,
            max_polar: std::f32::consts::PI - 1e-3,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
        }
    }
}

/// Y-up orbit around a fixed target. Panning is not supported.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    config: OrbitConfig,
    azimuth: f32,
    polar: f32,
    distance: f32,
    auto_rotate: bool,
}

impl OrbitCamera {
    pub fn new(config: OrbitConfig) -> Self {
        let mut cam = Self {
            config,
            azimuth: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            distance: 1.0,
            auto_rotate: false,
        };
        cam.reset();
        cam
    }

    /// Return to the home pose. Auto-rotation is left as it was.
    pub fn reset(&mut self) {
        let offset = self.config.home_eye - self.config.target;
        let distance = offset.length().max(1e-6);
        self.distance = distance.clamp(self.config.min_distance, self.config.max_distance);
        self.polar = (offset.y / distance)
            .clamp(-1.0, 1.0)
            .acos()
            .clamp(self.config.min_polar, self.config.max_polar);
        self.azimuth = offset.x.atan2(offset.z);
    }

    /// Rotate by a pointer drag delta in pixels.
    pub fn drag(&mut self, delta_px: Vec2) {
        self.rotate(
            -delta_px.x * self.config.rotate_speed,
            -delta_px.y * self.config.rotate_speed,
        );
    }

    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        self.azimuth += d_azimuth;
        self.polar = (self.polar + d_polar).clamp(self.config.min_polar, self.config.max_polar);
    }

    /// Scale the orbit distance; factors below 1 move closer.
    pub fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.distance = (self.distance * factor)
                .clamp(self.config.min_distance, self.config.max_distance);
        }
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn update(&mut self, dt_sec: f32) {
        if self.auto_rotate {
            self.azimuth += self.config.auto_rotate_speed * dt_sec;
        }
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.config.target + self.distance * Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a)
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.config.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: self.config.fovy_radians,
            znear: self.config.znear,
            zfar: self.config.zfar,
        }
    }
}
