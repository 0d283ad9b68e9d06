use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat4, Vec3};

/// Keeps `beta` off the poles so the view basis never degenerates.
const BETA_EPSILON: f32 = 1.0e-3;

/// Orbit camera circling a target point.
///
/// Spherical coordinates, +Y up:
/// - `alpha`: azimuth around +Y, radians
/// - `beta`: polar angle measured from +Y, clamped to `(0, π)`
/// - `radius`: distance to `target`, clamped to `>= min_radius`
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub name: String,
    alpha: f32,
    beta: f32,
    radius: f32,
    min_radius: f32,
    target: Vec3,
    fov_y: f32,
    near: f32,
    far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            name: "camera".to_string(),
            alpha: -FRAC_PI_2,
            beta: PI / 2.5,
            radius: 3.0,
            min_radius: 0.1,
            target: Vec3::ZERO,
            fov_y: 0.8,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    /// Creates an orbit camera; angles and radius are clamped.
    pub fn orbit_around(name: impl Into<String>, alpha: f32, beta: f32, radius: f32, target: Vec3) -> Self {
        let mut cam = Self { name: name.into(), target, ..Self::default() };
        cam.set_alpha(alpha);
        cam.set_beta(beta);
        cam.set_radius(radius);
        cam
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    #[inline]
    pub fn beta(&self) -> f32 {
        self.beta
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Returns `(near, far)`.
    #[inline]
    pub fn clip_planes(&self) -> (f32, f32) {
        (self.near, self.far)
    }

    /// Azimuth is wrapped into `[-π, π)` to keep precision over long orbits.
    pub fn set_alpha(&mut self, alpha: f32) {
        if alpha.is_finite() {
            self.alpha = (alpha + PI).rem_euclid(2.0 * PI) - PI;
        }
    }

    pub fn set_beta(&mut self, beta: f32) {
        if beta.is_finite() {
            self.beta = beta.clamp(BETA_EPSILON, PI - BETA_EPSILON);
        }
    }

    pub fn set_radius(&mut self, radius: f32) {
        if radius.is_finite() {
            self.radius = radius.max(self.min_radius);
        }
    }

    /// Sets the clip planes; ignored unless `0 < near < far`.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        if near > 0.0 && far > near && far.is_finite() {
            self.near = near;
            self.far = far;
        }
    }

    /// Rotates around the target by the given angle deltas.
    pub fn orbit(&mut self, d_alpha: f32, d_beta: f32) {
        self.set_alpha(self.alpha + d_alpha);
        self.set_beta(self.beta + d_beta);
    }

    /// Moves toward (negative) or away from (positive) the target.
    pub fn zoom(&mut self, d_radius: f32) {
        self.set_radius(self.radius + d_radius);
    }

    /// World-space eye position.
    pub fn position(&self) -> Vec3 {
        let (sin_a, cos_a) = self.alpha.sin_cos();
        let (sin_b, cos_b) = self.beta.sin_cos();
        self.target + Vec3::new(cos_a * sin_b, cos_b, sin_a * sin_b) * self.radius
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Perspective projection with a `[0, 1]` depth range.
    ///
    /// Non-positive or non-finite aspect ratios fall back to `1.0`.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
