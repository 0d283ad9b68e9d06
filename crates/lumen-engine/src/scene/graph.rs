use anyhow::{bail, Result};
use glam::Vec4;

use super::{Camera, Entity, EntityId, Light, Mesh};

/// Root container of renderable entities.
///
/// Entities are kept in insertion order per kind. The first camera added
/// becomes the active camera unless another one is selected explicitly.
#[derive(Debug)]
pub struct Scene {
    cameras: Vec<Entity<Camera>>,
    lights: Vec<Entity<Light>>,
    meshes: Vec<Entity<Mesh>>,
    active_camera: Option<EntityId>,
    /// Linear RGBA used to clear the colour target.
    pub clear_color: Vec4,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            cameras: Vec::new(),
            lights: Vec::new(),
            meshes: Vec::new(),
            active_camera: None,
            clear_color: Vec4::new(0.2, 0.2, 0.3, 1.0),
        }
    }

    // ── registration ──────────────────────────────────────────────────────

    pub fn add_camera(&mut self, camera: Camera) -> EntityId {
        let entity = Entity::new(camera);
        let id = entity.id();
        self.cameras.push(entity);
        self.active_camera.get_or_insert(id);
        id
    }

    pub fn add_light(&mut self, light: Light) -> EntityId {
        let entity = Entity::new(light);
        let id = entity.id();
        self.lights.push(entity);
        id
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> EntityId {
        let entity = Entity::new(mesh);
        let id = entity.id();
        self.meshes.push(entity);
        id
    }

    // ── registries ────────────────────────────────────────────────────────

    #[inline]
    pub fn cameras(&self) -> &[Entity<Camera>] {
        &self.cameras
    }

    #[inline]
    pub fn lights(&self) -> &[Entity<Light>] {
        &self.lights
    }

    #[inline]
    pub fn meshes(&self) -> &[Entity<Mesh>] {
        &self.meshes
    }

    pub fn camera_mut(&mut self, id: EntityId) -> Option<&mut Camera> {
        self.cameras.iter_mut().find(|c| c.id() == id).map(|c| &mut **c)
    }

    pub fn mesh_mut(&mut self, id: EntityId) -> Option<&mut Mesh> {
        self.meshes.iter_mut().find(|m| m.id() == id).map(|m| &mut **m)
    }

    // ── active camera ─────────────────────────────────────────────────────

    pub fn active_camera(&self) -> Option<&Entity<Camera>> {
        let id = self.active_camera?;
        self.cameras.iter().find(|c| c.id() == id)
    }

    pub fn active_camera_mut(&mut self) -> Option<&mut Camera> {
        let id = self.active_camera?;
        self.camera_mut(id)
    }

    /// Selects the camera used for rendering. Fails if `id` is not a camera of this scene.
    pub fn set_active_camera(&mut self, id: EntityId) -> Result<()> {
        if !self.cameras.iter().any(|c| c.id() == id) {
            bail!("entity {id} is not a camera in this scene");
        }
        self.active_camera = Some(id);
        Ok(())
    }

    // ── stats ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn entity_count(&self) -> usize {
        self.cameras.len() + self.lights.len() + self.meshes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entity_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{MeshBuffers, MeshHandle};
    use crate::geometry::MeshData;

    fn cpu_mesh(name: &str) -> Mesh {
        Mesh::new(name, MeshData::cube(1.0), MeshBuffers::cpu(MeshHandle::new(1)))
    }

    #[test]
    fn new_scene_is_empty() {
        let s = Scene::new();
        assert!(s.is_empty());
        assert!(s.active_camera().is_none());
    }

    #[test]
    fn registries_keep_insertion_order() {
        let mut s = Scene::new();
        s.add_light(Light::hemispheric("a", glam::Vec3::Y));
        s.add_light(Light::hemispheric("b", glam::Vec3::Y));
        let names: Vec<_> = s.lights().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(s.entity_count(), 2);
    }

    #[test]
    fn ids_are_unique_across_kinds_and_scenes() {
        let mut a = Scene::new();
        let mut b = Scene::new();
        let ids = [
            a.add_camera(Camera::default()),
            a.add_light(Light::default()),
            a.add_mesh(cpu_mesh("m")),
            b.add_camera(Camera::default()),
        ];
        for (i, x) in ids.iter().enumerate() {
            for y in &ids[i + 1..] {
                assert_ne!(x, y);
            }
        }
    }

    #[test]
    fn first_camera_becomes_active() {
        let mut s = Scene::new();
        let first = s.add_camera(Camera::default());
        let second = s.add_camera(Camera::default());
        assert_eq!(s.active_camera().map(|c| c.id()), Some(first));

        s.set_active_camera(second).unwrap();
        assert_eq!(s.active_camera().map(|c| c.id()), Some(second));
    }

    #[test]
    fn set_active_camera_rejects_non_camera() {
        let mut s = Scene::new();
        let cam = s.add_camera(Camera::default());
        let light = s.add_light(Light::default());
        assert!(s.set_active_camera(light).is_err());
        assert_eq!(s.active_camera().map(|c| c.id()), Some(cam));
    }

    #[test]
    fn lookup_by_id() {
        let mut s = Scene::new();
        let id = s.add_mesh(cpu_mesh("box"));
        s.mesh_mut(id).unwrap().color = glam::Vec3::X;
        assert_eq!(s.meshes()[0].color, glam::Vec3::X);
        assert!(s.camera_mut(id).is_none());
    }
}
