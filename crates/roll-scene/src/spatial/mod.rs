//! Spatial primitives for local node transforms
//!
//! Uses a right-handed coordinate system:
//! - X: Right (+) / Left (-)
//! - Y: Up (+) / Down (-)
//! - Z: Backward (+) / Forward (-)

mod transform;
mod vector3;

pub use transform::Transform;
pub use vector3::Vector3D;
