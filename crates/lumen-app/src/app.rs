use anyhow::Result;

use lumen_engine::engine::Engine;
use lumen_engine::geometry::MeshData;
use lumen_engine::glam::Vec3;
use lumen_engine::scene::{Camera, Light, Mesh, Scene};

/// Sphere tessellation used for [`BootstrapMesh::Sphere`].
const SPHERE_SEGMENTS: u32 = 32;

/// Shape of the mesh placed in the starter scene.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum BootstrapMesh {
    #[default]
    Box,
    Sphere,
}

impl BootstrapMesh {
    fn build(self) -> (&'static str, MeshData) {
        match self {
            BootstrapMesh::Box => ("box", MeshData::cube(1.0)),
            BootstrapMesh::Sphere => ("sphere", MeshData::uv_sphere(1.0, SPHERE_SEGMENTS)),
        }
    }
}

/// Scene bootstrapper.
///
/// Builds the starter scene: one orbit camera, one hemispheric light and one
/// mesh, all default-configured.
///
/// ```rust,ignore
/// let mut engine = NullEngine::new();
/// let scene = pollster::block_on(App::new().create_scene(&mut engine))?;
/// assert_eq!(scene.meshes().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct App {
    mesh: BootstrapMesh,
    mesh_color: Vec3,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            mesh: BootstrapMesh::default(),
            mesh_color: Vec3::new(0.8, 0.8, 0.8),
        }
    }

    /// Selects the mesh shape.
    pub fn mesh(mut self, mesh: BootstrapMesh) -> Self {
        self.mesh = mesh;
        self
    }

    /// Sets the mesh albedo (linear RGB).
    pub fn mesh_color(mut self, color: Vec3) -> Self {
        self.mesh_color = color;
        self
    }

    /// Creates a new scene on `engine`.
    ///
    /// Every call builds fresh entities. Engine failures are returned as-is.
    pub async fn create_scene<E: Engine>(&self, engine: &mut E) -> Result<Scene> {
        let mut scene = Scene::new();

        scene.add_camera(Camera::default());
        scene.add_light(Light::default());

        let (name, data) = self.mesh.build();
        let buffers = engine.upload_mesh(name, &data).await?;
        scene.add_mesh(Mesh::new(name, data, buffers).with_color(self.mesh_color));

        log::info!("scene ready on {} engine: {}", engine.backend(), describe_scene(&scene));
        Ok(scene)
    }
}

/// One-line summary: entity counts and mesh names.
pub fn describe_scene(scene: &Scene) -> String {
    let meshes: Vec<String> = scene
        .meshes()
        .iter()
        .map(|m| format!("{}({}v/{}t)", m.name, m.data().vertex_count(), m.data().triangle_count()))
        .collect();

    format!(
        "{} camera(s), {} light(s), {} mesh(es) [{}]",
        scene.cameras().len(),
        scene.lights().len(),
        scene.meshes().len(),
        meshes.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_engine::engine::NullEngine;
    use lumen_engine::scene::LightKind;

    fn bootstrap(app: &App) -> Result<Scene> {
        let mut engine = NullEngine::new();
        pollster::block_on(app.create_scene(&mut engine))
    }

    // ── create_scene ──────────────────────────────────────────────────────

    #[test]
    fn scene_has_one_camera_one_light_one_mesh() {
        let scene: Scene = bootstrap(&App::new()).unwrap();
        assert_eq!(scene.cameras().len(), 1);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.meshes().len(), 1);
    }

    #[test]
    fn entities_are_default_configured() {
        let scene = bootstrap(&App::default()).unwrap();

        assert_eq!(*scene.cameras()[0], Camera::default());
        assert_eq!(scene.lights()[0].kind, LightKind::Hemispheric);
        assert_eq!(scene.meshes()[0].name, "box");
        assert_eq!(scene.meshes()[0].data().vertex_count(), 24);
        assert_eq!(scene.active_camera().map(|c| c.id()), Some(scene.cameras()[0].id()));
    }

    #[test]
    fn fresh_bootstrapper_builds_new_entities() {
        let first = bootstrap(&App::new()).unwrap();
        let second = bootstrap(&App::new()).unwrap();

        assert_eq!(second.cameras().len(), 1);
        assert_eq!(second.lights().len(), 1);
        assert_eq!(second.meshes().len(), 1);

        assert_ne!(first.cameras()[0].id(), second.cameras()[0].id());
        assert_ne!(first.lights()[0].id(), second.lights()[0].id());
        assert_ne!(first.meshes()[0].id(), second.meshes()[0].id());
    }

    #[test]
    fn same_engine_issues_distinct_mesh_handles() {
        let app = App::new();
        let mut engine = NullEngine::new();
        let a = pollster::block_on(app.create_scene(&mut engine)).unwrap();
        let b = pollster::block_on(app.create_scene(&mut engine)).unwrap();

        assert_ne!(a.meshes()[0].handle(), b.meshes()[0].handle());
        assert_eq!(engine.uploaded_meshes(), 2);
    }

    #[test]
    fn engine_errors_propagate_unchanged() {
        let mut engine = NullEngine::failing("adapter unavailable");
        let err = pollster::block_on(App::new().create_scene(&mut engine)).unwrap_err();
        assert_eq!(err.to_string(), "adapter unavailable");
    }

    #[test]
    fn null_engine_meshes_are_not_gpu_resident() {
        let scene = bootstrap(&App::new()).unwrap();
        assert!(!scene.meshes()[0].is_gpu_resident());
    }

    // ── options ───────────────────────────────────────────────────────────

    #[test]
    fn sphere_option_changes_only_the_mesh() {
        let scene = bootstrap(&App::new().mesh(BootstrapMesh::Sphere)).unwrap();
        assert_eq!(scene.meshes()[0].name, "sphere");
        assert_eq!(scene.entity_count(), 3);
    }

    #[test]
    fn mesh_color_is_applied() {
        let scene = bootstrap(&App::new().mesh_color(Vec3::new(1.0, 0.0, 0.0))).unwrap();
        assert_eq!(scene.meshes()[0].color, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn summary_lists_counts_and_mesh() {
        let scene = bootstrap(&App::new()).unwrap();
        assert_eq!(
            describe_scene(&scene),
            "1 camera(s), 1 light(s), 1 mesh(es) [box(24v/12t)]"
        );
    }
}
