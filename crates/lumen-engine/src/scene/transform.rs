use glam::{Mat4, Quat, Vec3};

/// Translation, rotation and scale of a scene object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Local-to-world matrix (scale, then rotate, then translate).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Matrix for transforming normals: inverse-transpose of the model matrix.
    ///
    /// Falls back to identity when the scale is degenerate.
    pub fn normal_matrix(&self) -> Mat4 {
        let m = self.matrix();
        if m.determinant().abs() <= f32::EPSILON {
            return Mat4::IDENTITY;
        }
        m.inverse().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matrix() {
        assert_eq!(Transform::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn translation_moves_origin() {
        let t = Transform::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.matrix().transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn degenerate_scale_has_identity_normal_matrix() {
        let t = Transform::default().with_scale(Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(t.normal_matrix(), Mat4::IDENTITY);
    }
}
