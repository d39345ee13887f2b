//! Runtime geometry and its material

use crate::descriptor::ShapeSpec;

/// RGBA color used as material diffuse contents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BROWN: Self = Self::rgb(0.6, 0.4, 0.2);
    pub const ORANGE: Self = Self::rgb(1.0, 0.5, 0.0);

    /// Opaque color from RGB components in 0.0..=1.0
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Surface properties of a geometry's primary material
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    /// Diffuse contents; `None` keeps the engine default
    pub diffuse: Option<Color>,
    /// Whether back faces render
    pub double_sided: bool,
}

/// A constructed primitive together with its primary material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub shape: ShapeSpec,
    pub material: Material,
}

impl Geometry {
    /// Construct geometry with the engine-default material
    pub fn new(shape: ShapeSpec) -> Self {
        Self {
            shape,
            material: Material::default(),
        }
    }

    /// The geometry's primary material, mutable
    pub fn first_material_mut(&mut self) -> &mut Material {
        &mut self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let g = Geometry::new(ShapeSpec::Sphere { radius: 0.1 });
        assert_eq!(g.material.diffuse, None);
        assert!(!g.material.double_sided);
    }

    #[test]
    fn test_first_material_mut() {
        let mut g = Geometry::new(ShapeSpec::Plane {
            width: 1.0,
            height: 2.0,
        });
        g.first_material_mut().diffuse = Some(Color::BROWN);
        g.first_material_mut().double_sided = true;
        assert_eq!(g.material.diffuse, Some(Color::BROWN));
        assert!(g.material.double_sided);
    }
}
