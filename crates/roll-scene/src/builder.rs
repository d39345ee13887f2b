//! Materialization of descriptor trees into runtime scene graphs

use tracing::debug;

use crate::descriptor::NodeDescriptor;
use crate::geometry::Geometry;
use crate::node::SceneNode;
use crate::spatial::Transform;

/// Build the runtime node hierarchy described by `descriptor`.
///
/// The returned node carries the descriptor's name, its local transform
/// (Euler angles converted from degrees to radians, independently per axis),
/// its geometry and material if a shape was requested, and its children
/// built recursively in input order.
///
/// Pure and deterministic: the descriptor is not mutated, no state outside
/// the returned subtree is touched, and identical descriptors always yield
/// structurally identical trees.
pub fn build(descriptor: &NodeDescriptor) -> SceneNode {
    let mut node = SceneNode::new(descriptor.name.clone());
    node.transform = Transform {
        position: descriptor.position,
        euler_angles: descriptor.euler_degrees.to_radians(),
        scale: descriptor.scale,
    };

    if let Some(shape) = descriptor.shape {
        let mut geometry = Geometry::new(shape);
        let material = geometry.first_material_mut();
        if let Some(tint) = descriptor.tint {
            material.diffuse = Some(tint);
        }
        material.double_sided = descriptor.double_sided;
        debug!(name = %descriptor.name, kind = ?shape.kind(), "constructed geometry");
        node.geometry = Some(geometry);
    }

    for child in &descriptor.children {
        node.add_child(build(child));
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ShapeSpec;
    use crate::geometry::Color;
    use crate::spatial::Vector3D;
    use std::f32::consts::PI;

    #[test]
    fn test_group_node_has_no_geometry() {
        // tint and double-sided are ignored when no shape is requested
        let d = NodeDescriptor::group("empty group")
            .with_tint(Color::ORANGE)
            .double_sided(true);
        let node = build(&d);
        assert!(node.geometry.is_none());
    }

    #[test]
    fn test_euler_degrees_converted_to_radians() {
        let d = NodeDescriptor::group("tilted")
            .with_euler_degrees(Vector3D::new(90.0, 45.0, -5.0));
        let node = build(&d);
        let e = node.transform.euler_angles;
        assert!((e.x - 90.0 * PI / 180.0).abs() < 1e-6);
        assert!((e.y - 45.0 * PI / 180.0).abs() < 1e-6);
        assert!((e.z - (-5.0) * PI / 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_position_and_scale_copied() {
        let d = NodeDescriptor::group("placed")
            .with_position(Vector3D::new(0.0, 0.0, -2.0))
            .with_scale(Vector3D::new(2.0, 1.0, 0.5));
        let node = build(&d);
        assert_eq!(node.transform.position, Vector3D::new(0.0, 0.0, -2.0));
        assert_eq!(node.transform.scale, Vector3D::new(2.0, 1.0, 0.5));
    }

    #[test]
    fn test_box_dimensions_preserved() {
        let shape = ShapeSpec::Box {
            width: 2.0,
            height: 3.0,
            length: 4.0,
            chamfer_radius: 0.5,
        };
        let node = build(&NodeDescriptor::new("box", shape));
        assert_eq!(node.geometry.unwrap().shape, shape);
    }

    #[test]
    fn test_tint_and_double_sided_applied() {
        let d = NodeDescriptor::new(
            "plane",
            ShapeSpec::Plane {
                width: 1.0,
                height: 1.0,
            },
        )
        .with_tint(Color::BROWN)
        .double_sided(true);
        let material = build(&d).geometry.unwrap().material;
        assert_eq!(material.diffuse, Some(Color::BROWN));
        assert!(material.double_sided);
    }

    #[test]
    fn test_missing_tint_keeps_default_diffuse() {
        // double-sided is still set even without a tint
        let d = NodeDescriptor::new("ball", ShapeSpec::Sphere { radius: 0.1 })
            .double_sided(true);
        let material = build(&d).geometry.unwrap().material;
        assert_eq!(material.diffuse, None);
        assert!(material.double_sided);
    }

    #[test]
    fn test_structure_preserved() {
        let d = NodeDescriptor::group("root")
            .with_child(
                NodeDescriptor::group("left")
                    .with_child(NodeDescriptor::new("a", ShapeSpec::Sphere { radius: 1.0 }))
                    .with_child(NodeDescriptor::new("b", ShapeSpec::Sphere { radius: 2.0 })),
            )
            .with_child(NodeDescriptor::group("right"));
        let node = build(&d);

        let names: Vec<&str> = node.children().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["left", "right"]);

        let left = &node.children()[0];
        let grandchildren: Vec<&str> =
            left.children().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(grandchildren, vec!["a", "b"]);
        assert!(node.children()[1].children().is_empty());
    }

    #[test]
    fn test_building_twice_is_identical() {
        let d = NodeDescriptor::group("root")
            .with_euler_degrees(Vector3D::new(0.0, 0.0, -5.0))
            .with_child(
                NodeDescriptor::new("ball", ShapeSpec::Sphere { radius: 0.1 })
                    .with_tint(Color::ORANGE)
                    .with_position(Vector3D::new(-0.45, 0.105, -2.0)),
            );
        assert_eq!(build(&d), build(&d));
    }

    #[test]
    fn test_descriptor_not_consumed() {
        let d = NodeDescriptor::new("ball", ShapeSpec::Sphere { radius: 0.1 });
        let before = d.clone();
        let _ = build(&d);
        assert_eq!(d, before);
    }
}
