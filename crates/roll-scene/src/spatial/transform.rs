//! Transform representing position, rotation, and scale in 3D space

use super::Vector3D;

/// A complete local transform (position + Euler rotation + scale)
///
/// Euler angles are stored in radians. Descriptors author degrees; the tree
/// builder converts exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3D,
    pub euler_angles: Vector3D,
    pub scale: Vector3D,
}

impl Transform {
    /// Identity transform (origin, no rotation, unit scale)
    pub fn identity() -> Self {
        Self {
            position: Vector3D::ZERO,
            euler_angles: Vector3D::ZERO,
            scale: Vector3D::ONE,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
