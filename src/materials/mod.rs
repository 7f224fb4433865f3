use crate::math::*;

/// How a surface reflects light.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MaterialType {
    /// Scatters into a random, cosine weighted direction about the normal.
    Diffuse,
    /// Mirror reflection about the normal, see [`reflect`].
    Specular,
}

/// Surface material. Immutable and cheap to copy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// Color of the surface
    pub color: Colorf,
    /// Color of the light that this surface emits, zero for non emissive surfaces
    pub emission: Colorf,
    pub kind: MaterialType,
}

impl Material {
    pub const fn new(color: Colorf, emission: Colorf, kind: MaterialType) -> Self {
        Material {
            color,
            emission,
            kind,
        }
    }

    pub const fn diffuse(color: Colorf) -> Self {
        Material::new(color, COLOR_BLACK, MaterialType::Diffuse)
    }

    pub const fn specular(color: Colorf) -> Self {
        Material::new(color, COLOR_BLACK, MaterialType::Specular)
    }

    pub const fn light(emission: Colorf) -> Self {
        Material::new(COLOR_BLACK, emission, MaterialType::Diffuse)
    }

    pub fn is_emissive(&self) -> bool {
        self.emission != COLOR_BLACK
    }

    /// Pick the direction of the next path segment leaving a surface with outward `normal`,
    /// given the incoming ray `direction`.
    ///
    /// Returns None if no usable direction could be generated.
    pub fn generate(&self, direction: Vec3, normal: Vec3, s: Sample2D) -> Option<Vec3> {
        match self.kind {
            MaterialType::Specular => Some(reflect(direction, normal)),
            MaterialType::Diffuse => {
                let frame = TangentFrame::from_normal(normal);
                try_normalize(frame.to_world(&random_cosine_direction(s)))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_constructors() {
        let red = Colorf::new(0.9, 0.1, 0.1);
        let m = Material::diffuse(red);
        assert_eq!(m.kind, MaterialType::Diffuse);
        assert!(!m.is_emissive());

        let m = Material::specular(red);
        assert_eq!(m.kind, MaterialType::Specular);
        assert_eq!(m.color, red);

        let m = Material::light(Colorf::splat(4.0));
        assert!(m.is_emissive());
        assert_eq!(m.color, COLOR_BLACK);
    }

    #[test]
    fn test_specular_generate_is_deterministic() {
        let m = Material::specular(COLOR_WHITE);
        let d = Vec3::new(1.0, -1.0, 0.0);
        let a = m.generate(d, Vec3::Y, Sample2D::new(0.1, 0.2)).unwrap();
        let b = m.generate(d, Vec3::Y, Sample2D::new(0.9, 0.7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, reflect(d, Vec3::Y));
    }

    #[test]
    fn test_diffuse_generate_stays_in_hemisphere() {
        let m = Material::diffuse(COLOR_WHITE);
        let normal = normalize(Vec3::new(0.3, -1.0, 0.2));
        let mut sampler = RandomSampler::new();
        for _ in 0..10000 {
            let wo = m
                .generate(Vec3::new(0.0, 1.0, 0.0), normal, sampler.draw_2d())
                .unwrap();
            assert!(dot(wo, normal) > 0.0, "{:?}", wo);
            assert!((wo.len() - 1.0).abs() < 1e-9);
        }
    }
}
