use glam::Vec3;

/// How a light contributes to shading.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LightKind {
    /// Sky/ground blend driven by the surface normal. `direction` points at the sky.
    Hemispheric,
    /// Parallel rays. `direction` is the direction the light travels.
    Directional,
}

/// Scene light.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub name: String,
    pub kind: LightKind,
    direction: Vec3,
    pub intensity: f32,
    /// Sky colour for hemispheric lights, light colour otherwise. Linear RGB.
    pub diffuse: Vec3,
    /// Colour seen by normals facing away from `direction` (hemispheric only).
    pub ground_color: Vec3,
}

impl Default for Light {
    fn default() -> Self {
        Self::hemispheric("light", Vec3::Y)
    }
}

impl Light {
    pub fn hemispheric(name: impl Into<String>, direction: Vec3) -> Self {
        Self::with_kind(name, LightKind::Hemispheric, direction)
    }

    pub fn directional(name: impl Into<String>, direction: Vec3) -> Self {
        Self::with_kind(name, LightKind::Directional, direction)
    }

    fn with_kind(name: impl Into<String>, kind: LightKind, direction: Vec3) -> Self {
        Self {
            name: name.into(),
            kind,
            direction: normalize_or_up(direction),
            intensity: 0.7,
            diffuse: Vec3::ONE,
            ground_color: Vec3::ZERO,
        }
    }

    /// Unit-length direction.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Sets the direction. Zero or non-finite vectors become +Y.
    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = normalize_or_up(direction);
    }

    /// Light reaching a surface with the given unit normal, before albedo.
    pub fn irradiance(&self, normal: Vec3) -> Vec3 {
        let n = normal.normalize_or_zero();
        match self.kind {
            LightKind::Hemispheric => {
                let t = 0.5 * n.dot(self.direction) + 0.5;
                self.ground_color.lerp(self.diffuse, t) * self.intensity
            }
            LightKind::Directional => {
                let lambert = n.dot(-self.direction).max(0.0);
                self.diffuse * lambert * self.intensity
            }
        }
    }
}

fn normalize_or_up(v: Vec3) -> Vec3 {
    v.try_normalize().unwrap_or(Vec3::Y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hemispheric_up() {
        let l = Light::default();
        assert_eq!(l.kind, LightKind::Hemispheric);
        assert_eq!(l.direction(), Vec3::Y);
        assert_eq!(l.intensity, 0.7);
    }

    #[test]
    fn direction_is_normalized() {
        let l = Light::directional("sun", Vec3::new(0.0, -4.0, 0.0));
        assert_eq!(l.direction(), Vec3::NEG_Y);
    }

    #[test]
    fn zero_direction_falls_back_to_up() {
        let mut l = Light::default();
        l.set_direction(Vec3::ZERO);
        assert_eq!(l.direction(), Vec3::Y);
        l.set_direction(Vec3::new(f32::NAN, 1.0, 0.0));
        assert_eq!(l.direction(), Vec3::Y);
    }

    #[test]
    fn hemispheric_blends_sky_and_ground() {
        let l = Light::default();
        assert_eq!(l.irradiance(Vec3::Y), Vec3::splat(0.7));
        assert_eq!(l.irradiance(Vec3::NEG_Y), Vec3::ZERO);
        let side = l.irradiance(Vec3::X);
        assert!((side.x - 0.35).abs() < 1e-6);
    }

    #[test]
    fn directional_is_lambertian() {
        let l = Light::directional("sun", Vec3::NEG_Y);
        assert_eq!(l.irradiance(Vec3::Y), Vec3::splat(0.7));
        assert_eq!(l.irradiance(Vec3::NEG_Y), Vec3::ZERO);
    }
}
