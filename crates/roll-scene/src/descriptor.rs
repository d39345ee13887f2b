//! Declarative node descriptors
//!
//! A scene is authored once as an immutable tree of [`NodeDescriptor`] values
//! and materialized by [`crate::builder::build`]. Descriptors are never
//! mutated; the runtime scene graph is the only surviving artifact.

use crate::error::SceneError;
use crate::geometry::Color;
use crate::spatial::Vector3D;

/// Geometry classes a descriptor can request
///
/// `None` marks a pure group/transform node with no visible geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Box,
    Plane,
    Cylinder,
    Sphere,
    Capsule,
    None,
}

/// Shape arguments, keyed by the geometry kind they construct
///
/// Each variant carries exactly the numeric fields its kind requires, so a
/// kind/argument mismatch cannot be authored in typed code. Loosely typed
/// argument lists go through [`ShapeSpec::from_args`], which rejects wrong
/// arity instead of truncating or defaulting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeSpec {
    /// Rectangular box, optionally with rounded edges
    Box {
        width: f32,
        height: f32,
        length: f32,
        chamfer_radius: f32,
    },
    /// Flat rectangle
    Plane { width: f32, height: f32 },
    /// Circular cylinder
    Cylinder { radius: f32, height: f32 },
    /// Sphere
    Sphere { radius: f32 },
    /// Cylinder capped with hemispheres
    Capsule { cap_radius: f32, height: f32 },
}

impl ShapeSpec {
    /// The kind of geometry these arguments construct
    pub fn kind(&self) -> GeometryKind {
        match self {
            ShapeSpec::Box { .. } => GeometryKind::Box,
            ShapeSpec::Plane { .. } => GeometryKind::Plane,
            ShapeSpec::Cylinder { .. } => GeometryKind::Cylinder,
            ShapeSpec::Sphere { .. } => GeometryKind::Sphere,
            ShapeSpec::Capsule { .. } => GeometryKind::Capsule,
        }
    }

    /// Construct shape arguments from a loosely typed argument list.
    ///
    /// Fails fast on arity mismatch and on the group kind, which has no
    /// constructor. Arguments are consumed in the order the kind's
    /// constructor declares them.
    pub fn from_args(kind: GeometryKind, args: &[f32]) -> Result<Self, SceneError> {
        let expected = match kind {
            GeometryKind::Box => 4,
            GeometryKind::Plane | GeometryKind::Cylinder | GeometryKind::Capsule => 2,
            GeometryKind::Sphere => 1,
            GeometryKind::None => return Err(SceneError::UnimplementedGeometry(kind)),
        };
        if args.len() != expected {
            return Err(SceneError::MalformedShapeArgs {
                kind,
                expected,
                got: args.len(),
            });
        }
        Ok(match kind {
            GeometryKind::Box => ShapeSpec::Box {
                width: args[0],
                height: args[1],
                length: args[2],
                chamfer_radius: args[3],
            },
            GeometryKind::Plane => ShapeSpec::Plane {
                width: args[0],
                height: args[1],
            },
            GeometryKind::Cylinder => ShapeSpec::Cylinder {
                radius: args[0],
                height: args[1],
            },
            GeometryKind::Sphere => ShapeSpec::Sphere { radius: args[0] },
            GeometryKind::Capsule => ShapeSpec::Capsule {
                cap_radius: args[0],
                height: args[1],
            },
            GeometryKind::None => unreachable!(),
        })
    }
}

/// A single node in the declarative scene tree
///
/// Names are not required to be unique; lookups after materialization return
/// the first match in depth-first order.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDescriptor {
    pub name: String,
    /// Geometry to construct; `None` makes this a pure group node
    pub shape: Option<ShapeSpec>,
    /// Diffuse contents for the geometry's material; `None` keeps the
    /// engine default
    pub tint: Option<Color>,
    /// Whether back faces of the geometry render
    pub double_sided: bool,
    pub position: Vector3D,
    /// Euler rotation authored in degrees; converted to radians when built
    pub euler_degrees: Vector3D,
    pub scale: Vector3D,
    /// Ordered child descriptors (order is traversal order)
    pub children: Vec<NodeDescriptor>,
}

impl NodeDescriptor {
    /// A pure group/transform node with no visible geometry
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: None,
            tint: None,
            double_sided: false,
            position: Vector3D::ZERO,
            euler_degrees: Vector3D::ZERO,
            scale: Vector3D::ONE,
            children: Vec::new(),
        }
    }

    /// A node carrying geometry
    pub fn new(name: impl Into<String>, shape: ShapeSpec) -> Self {
        Self {
            shape: Some(shape),
            ..Self::group(name)
        }
    }

    /// Set the material's diffuse contents
    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Set whether back faces render
    pub fn double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = double_sided;
        self
    }

    /// Set the local position
    pub fn with_position(mut self, position: Vector3D) -> Self {
        self.position = position;
        self
    }

    /// Set the local rotation, in degrees per axis
    pub fn with_euler_degrees(mut self, euler_degrees: Vector3D) -> Self {
        self.euler_degrees = euler_degrees;
        self
    }

    /// Set the local scale
    pub fn with_scale(mut self, scale: Vector3D) -> Self {
        self.scale = scale;
        self
    }

    /// Append a child descriptor
    pub fn with_child(mut self, child: NodeDescriptor) -> Self {
        self.children.push(child);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let spec = ShapeSpec::Sphere { radius: 0.1 };
        assert_eq!(spec.kind(), GeometryKind::Sphere);

        let spec = ShapeSpec::Box {
            width: 1.0,
            height: 1.0,
            length: 1.0,
            chamfer_radius: 0.0,
        };
        assert_eq!(spec.kind(), GeometryKind::Box);
    }

    #[test]
    fn test_from_args_box() {
        let spec = ShapeSpec::from_args(GeometryKind::Box, &[1.0, 0.01, 1.0, 0.0]).unwrap();
        assert_eq!(
            spec,
            ShapeSpec::Box {
                width: 1.0,
                height: 0.01,
                length: 1.0,
                chamfer_radius: 0.0,
            }
        );
    }

    #[test]
    fn test_from_args_sphere() {
        let spec = ShapeSpec::from_args(GeometryKind::Sphere, &[0.1]).unwrap();
        assert_eq!(spec, ShapeSpec::Sphere { radius: 0.1 });
    }

    #[test]
    fn test_from_args_wrong_arity_fails() {
        // A box needs 4 arguments; 2 must not silently truncate or default
        let err = ShapeSpec::from_args(GeometryKind::Box, &[1.0, 0.5]).unwrap_err();
        assert_eq!(
            err,
            SceneError::MalformedShapeArgs {
                kind: GeometryKind::Box,
                expected: 4,
                got: 2,
            }
        );
    }

    #[test]
    fn test_from_args_group_kind_fails() {
        let err = ShapeSpec::from_args(GeometryKind::None, &[]).unwrap_err();
        assert_eq!(err, SceneError::UnimplementedGeometry(GeometryKind::None));
    }

    #[test]
    fn test_builder_chain() {
        let d = NodeDescriptor::new("ball", ShapeSpec::Sphere { radius: 0.1 })
            .with_tint(Color::ORANGE)
            .with_position(Vector3D::new(-0.45, 0.105, -2.0));
        assert_eq!(d.name, "ball");
        assert_eq!(d.tint, Some(Color::ORANGE));
        assert!(!d.double_sided);
        assert!(d.children.is_empty());
    }
}
