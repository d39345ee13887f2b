//! The static scene description

use roll_scene::{Color, NodeDescriptor, ShapeSpec, Vector3D};

/// The demo's descriptor tree: an inclined plane and a ball.
///
/// The root group is tilted -5 degrees about z so gravity rolls the ball left
/// to right down the plane, until it falls off. The ball's y of 0.105 is
/// 0.1 + 0.01 / 2: sphere radius plus half the plane's thickness, resting it
/// on the top face.
pub fn setup_descriptor() -> NodeDescriptor {
    NodeDescriptor::group("Setup")
        .with_euler_degrees(Vector3D::new(0.0, 0.0, -5.0))
        .with_child(
            NodeDescriptor::new(
                "inclined plane",
                ShapeSpec::Box {
                    width: 1.0,
                    height: 0.01,
                    length: 1.0,
                    chamfer_radius: 0.0,
                },
            )
            .with_tint(Color::BROWN)
            .double_sided(true)
            .with_position(Vector3D::new(0.0, 0.0, -2.0)),
        )
        .with_child(
            NodeDescriptor::new("ball", ShapeSpec::Sphere { radius: 0.1 })
                .with_tint(Color::ORANGE)
                .with_position(Vector3D::new(-0.45, 0.105, -2.0)),
        )
}
