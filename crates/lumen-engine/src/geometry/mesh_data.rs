use anyhow::{bail, Result};
use glam::Vec3;

use super::Vertex;

/// Axis-aligned bounding box in mesh-local space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Checks the data can be uploaded and drawn as a triangle list.
    ///
    /// Rejects empty meshes, index counts that are not a multiple of three,
    /// out-of-range indices and non-finite positions.
    pub fn validate(&self) -> Result<()> {
        if self.vertices.is_empty() || self.indices.is_empty() {
            bail!("mesh has no geometry");
        }
        if self.indices.len() % 3 != 0 {
            bail!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            );
        }

        let n = self.vertices.len();
        if let Some(bad) = self.indices.iter().find(|&&i| i as usize >= n) {
            bail!("index {bad} out of range for {n} vertices");
        }

        if let Some(pos) = self
            .vertices
            .iter()
            .position(|v| v.position.iter().any(|c| !c.is_finite()))
        {
            bail!("vertex {pos} has a non-finite position");
        }

        Ok(())
    }

    /// Returns the bounds of all vertex positions, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Aabb> {
        let first = Vec3::from(self.vertices.first()?.position);
        let (min, max) = self.vertices.iter().skip(1).fold((first, first), |(lo, hi), v| {
            let p = Vec3::from(v.position);
            (lo.min(p), hi.max(p))
        });
        Some(Aabb { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mesh_has_no_bounds_and_fails_validation() {
        let mesh = MeshData::default();
        assert!(mesh.bounds().is_none());
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn bounds_cover_every_vertex() {
        let up = [0.0, 1.0, 0.0];
        let mesh = MeshData::new(
            vec![
                Vertex::new([-1.0, 0.0, 2.0], up),
                Vertex::new([3.0, -2.0, 0.0], up),
                Vertex::new([0.0, 4.0, -1.0], up),
            ],
            vec![0, 1, 2],
        );
        let aabb = mesh.bounds().unwrap();
        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -1.0));
        assert_eq!(aabb.max, Vec3::new(3.0, 4.0, 2.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 1.0, 0.5));
        assert_eq!(mesh.triangle_count(), 1);
    }
}
