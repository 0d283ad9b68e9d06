//! CPU mirrors of the uniform blocks in `shaders/mesh.wgsl`.

use bytemuck::{Pod, Zeroable};

use crate::scene::{Light, LightKind, Mesh, Scene};

/// Lights beyond this count are ignored by the mesh shader.
pub const MAX_LIGHTS: usize = 4;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct LightUniform {
    pub direction: [f32; 4],
    pub diffuse: [f32; 4],
    pub ground: [f32; 4],
}

impl From<&Light> for LightUniform {
    fn from(l: &Light) -> Self {
        let kind = match l.kind {
            LightKind::Hemispheric => 0.0,
            LightKind::Directional => 1.0,
        };
        Self {
            direction: l.direction().extend(kind).to_array(),
            diffuse: l.diffuse.extend(l.intensity).to_array(),
            ground: l.ground_color.extend(0.0).to_array(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct FrameUniform {
    pub view_proj: [[f32; 4]; 4],
    pub light_count: [u32; 4],
    pub lights: [LightUniform; MAX_LIGHTS],
}

impl FrameUniform {
    /// Builds the per-frame block from the active camera and the first
    /// [`MAX_LIGHTS`] lights. Returns `None` when the scene has no camera.
    pub fn from_scene(scene: &Scene, aspect: f32) -> Option<Self> {
        let camera = scene.active_camera()?;

        let mut u = Self::zeroed();
        u.view_proj = camera.view_projection(aspect).to_cols_array_2d();

        let lights = scene.lights();
        if lights.len() > MAX_LIGHTS {
            log::debug!("{} lights in scene; shading uses the first {MAX_LIGHTS}", lights.len());
        }
        for (slot, light) in u.lights.iter_mut().zip(lights) {
            *slot = LightUniform::from(&**light);
        }
        u.light_count[0] = lights.len().min(MAX_LIGHTS) as u32;

        Some(u)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ModelUniform {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl From<&Mesh> for ModelUniform {
    fn from(m: &Mesh) -> Self {
        Self {
            model: m.transform.matrix().to_cols_array_2d(),
            normal: m.transform.normal_matrix().to_cols_array_2d(),
            color: m.color.extend(1.0).to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Camera;
    use glam::Vec3;

    #[test]
    fn uniform_sizes_match_shader_layout() {
        assert_eq!(std::mem::size_of::<LightUniform>(), 48);
        assert_eq!(std::mem::size_of::<FrameUniform>(), 64 + 16 + 48 * MAX_LIGHTS);
        assert_eq!(std::mem::size_of::<ModelUniform>(), 144);
    }

    #[test]
    fn no_camera_no_frame() {
        let mut s = Scene::new();
        s.add_light(Light::default());
        assert!(FrameUniform::from_scene(&s, 1.0).is_none());
    }

    #[test]
    fn light_count_is_capped() {
        let mut s = Scene::new();
        s.add_camera(Camera::default());
        for _ in 0..MAX_LIGHTS + 2 {
            s.add_light(Light::default());
        }
        let u = FrameUniform::from_scene(&s, 1.0).unwrap();
        assert_eq!(u.light_count[0] as usize, MAX_LIGHTS);
    }

    #[test]
    fn light_packing() {
        let l = Light::directional("sun", Vec3::NEG_Y);
        let u = LightUniform::from(&l);
        assert_eq!(u.direction, [0.0, -1.0, 0.0, 1.0]);
        assert_eq!(u.diffuse[3], l.intensity);
    }
}
