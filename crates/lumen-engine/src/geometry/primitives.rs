use std::f32::consts::PI;

use glam::Vec3;

use super::{MeshData, Vertex};

/// Minimum sphere tessellation; lower values are clamped.
const MIN_SPHERE_SEGMENTS: u32 = 3;
/// Keeps vertex indices and allocation sizes well inside `u32`.
pub const MAX_SPHERE_SEGMENTS: u32 = 512;

/// Face table for axis-aligned boxes: `(normal, u, v)` with `u × v = normal`,
/// so corners walked in (u, v) order are counter-clockwise from outside.
const BOX_FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
];

const QUAD_CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

impl MeshData {
    /// Box centered at the origin with the given extents.
    ///
    /// Each face has its own four vertices so normals stay flat.
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let half = Vec3::new(width, height, depth).abs() * 0.5;

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (normal, u, v) in BOX_FACES {
            let base = vertices.len() as u32;
            for (su, sv) in QUAD_CORNERS {
                let p = (normal + u * su + v * sv) * half;
                vertices.push(Vertex::new(p.to_array(), normal.to_array()));
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self::new(vertices, indices)
    }

    /// Cube with edge length `size`.
    #[inline]
    pub fn cube(size: f32) -> Self {
        Self::cuboid(size, size, size)
    }

    /// UV sphere with `segments` rings and `2 * segments` sectors.
    ///
    /// `segments` is clamped to `[3, MAX_SPHERE_SEGMENTS]`.
    /// Pole rows keep their seam vertices but emit no degenerate triangles.
    pub fn uv_sphere(diameter: f32, segments: u32) -> Self {
        let radius = diameter.abs() * 0.5;
        let rings = segments.clamp(MIN_SPHERE_SEGMENTS, MAX_SPHERE_SEGMENTS);
        let sectors = rings * 2;
        let stride = sectors + 1;

        let mut vertices = Vec::with_capacity(((rings + 1) * stride) as usize);
        for i in 0..=rings {
            let phi = PI * i as f32 / rings as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            for j in 0..=sectors {
                let theta = 2.0 * PI * j as f32 / sectors as f32;
                let (sin_theta, cos_theta) = theta.sin_cos();
                let n = Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
                vertices.push(Vertex::new((n * radius).to_array(), n.to_array()));
            }
        }

        let mut indices = Vec::with_capacity((sectors * (2 * rings - 2) * 3) as usize);
        for i in 0..rings {
            for j in 0..sectors {
                let a = i * stride + j;
                let b = a + stride;
                if i != 0 {
                    indices.extend_from_slice(&[a, a + 1, b]);
                }
                if i != rings - 1 {
                    indices.extend_from_slice(&[a + 1, b + 1, b]);
                }
            }
        }

        Self::new(vertices, indices)
    }

    /// Flat ground plane in XZ facing +Y.
    pub fn ground(width: f32, depth: f32) -> Self {
        let half = Vec3::new(width.abs() * 0.5, 0.0, depth.abs() * 0.5);
        let (normal, u, v) = (Vec3::Y, Vec3::Z, Vec3::X);

        let vertices = QUAD_CORNERS
            .iter()
            .map(|&(su, sv)| {
                let p = (u * su + v * sv) * half;
                Vertex::new(p.to_array(), normal.to_array())
            })
            .collect();

        Self::new(vertices, vec![0, 1, 2, 0, 2, 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_normal(mesh: &MeshData, tri: usize) -> Vec3 {
        let p = |k: usize| Vec3::from(mesh.vertices[mesh.indices[tri * 3 + k] as usize].position);
        (p(1) - p(0)).cross(p(2) - p(0))
    }

    // ── cuboid ────────────────────────────────────────────────────────────

    #[test]
    fn cube_counts() {
        let m = MeshData::cube(1.0);
        assert_eq!(m.vertex_count(), 24);
        assert_eq!(m.index_count(), 36);
        assert_eq!(m.triangle_count(), 12);
        m.validate().unwrap();
    }

    #[test]
    fn cube_bounds_match_size() {
        let b = MeshData::cuboid(2.0, 4.0, 6.0).bounds().unwrap();
        assert_eq!(b.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(b.max, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b.center(), Vec3::ZERO);
    }

    #[test]
    fn cube_triangles_face_outward() {
        let m = MeshData::cube(1.0);
        for tri in 0..m.triangle_count() {
            let n = triangle_normal(&m, tri);
            let vn = Vec3::from(m.vertices[m.indices[tri * 3] as usize].normal);
            assert!(n.dot(vn) > 0.0, "triangle {tri} is wound inward");
        }
    }

    // ── uv_sphere ─────────────────────────────────────────────────────────

    #[test]
    fn sphere_counts_skip_pole_triangles() {
        let m = MeshData::uv_sphere(1.0, 8);
        let (rings, sectors) = (8usize, 16usize);
        assert_eq!(m.vertex_count(), (rings + 1) * (sectors + 1));
        assert_eq!(m.triangle_count(), sectors * (2 * rings - 2));
        m.validate().unwrap();
    }

    #[test]
    fn sphere_normals_are_unit_and_radial() {
        let m = MeshData::uv_sphere(2.0, 6);
        for v in &m.vertices {
            let n = Vec3::from(v.normal);
            let p = Vec3::from(v.position);
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!((p.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn sphere_triangles_face_outward() {
        let m = MeshData::uv_sphere(1.0, 5);
        for tri in 0..m.triangle_count() {
            let n = triangle_normal(&m, tri);
            let centroid: Vec3 = (0..3)
                .map(|k| Vec3::from(m.vertices[m.indices[tri * 3 + k] as usize].position))
                .sum::<Vec3>()
                / 3.0;
            assert!(n.dot(centroid) > 0.0, "triangle {tri} is wound inward");
        }
    }

    #[test]
    fn sphere_segments_are_clamped() {
        let m = MeshData::uv_sphere(1.0, 0);
        assert_eq!(m.vertex_count(), 4 * 7);
        m.validate().unwrap();
    }

    #[test]
    fn huge_segment_counts_are_capped() {
        let m = MeshData::uv_sphere(1.0, u32::MAX / 2 + 1);
        let (rings, sectors) = (MAX_SPHERE_SEGMENTS as usize, 2 * MAX_SPHERE_SEGMENTS as usize);
        assert_eq!(m.vertex_count(), (rings + 1) * (sectors + 1));
        assert_eq!(m.triangle_count(), sectors * (2 * rings - 2));
        m.validate().unwrap();
    }

    // ── ground ────────────────────────────────────────────────────────────

    #[test]
    fn ground_faces_up() {
        let m = MeshData::ground(4.0, 2.0);
        m.validate().unwrap();
        for tri in 0..m.triangle_count() {
            assert!(triangle_normal(&m, tri).y > 0.0);
        }
        let b = m.bounds().unwrap();
        assert_eq!(b.size(), Vec3::new(4.0, 0.0, 2.0));
    }

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn validate_rejects_bad_data() {
        let v = Vertex::new([0.0; 3], [0.0, 1.0, 0.0]);

        assert!(MeshData::default().validate().is_err());
        assert!(MeshData::new(vec![v; 3], vec![0, 1]).validate().is_err());
        assert!(MeshData::new(vec![v; 3], vec![0, 1, 3]).validate().is_err());

        let nan = Vertex::new([f32::NAN, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(MeshData::new(vec![v, v, nan], vec![0, 1, 2]).validate().is_err());
    }
}
