//! Physics shapes and bodies attached to scene nodes
//!
//! The facade only models attachment; stepping the simulation belongs to the
//! host engine.

use crate::error::SceneError;
use crate::node::SceneNode;

/// How a collision shape is derived from a node's geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    /// Convex hull of the geometry (engine default)
    ConvexHull,
    /// Exact concave polyhedron; required for hollow or flat colliders
    ConcavePolyhedron,
    /// Axis-aligned bounding box
    BoundingBox,
}

/// Options controlling shape derivation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeOptions {
    /// Extra margin around the collision surface
    pub collision_margin: Option<f32>,
    /// Override for the derivation strategy
    pub shape_type: Option<ShapeType>,
}

impl ShapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the collision margin
    pub fn with_collision_margin(mut self, margin: f32) -> Self {
        self.collision_margin = Some(margin);
        self
    }

    /// Set the shape derivation strategy
    pub fn with_shape_type(mut self, shape_type: ShapeType) -> Self {
        self.shape_type = Some(shape_type);
        self
    }
}

/// A collision shape derived from a node's geometry
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsShape {
    source: String,
    options: ShapeOptions,
}

impl PhysicsShape {
    /// Derive a collision shape from `node`'s geometry.
    ///
    /// The node, or one of its descendants, must carry geometry; a shape for
    /// a bare group node is an authoring mistake.
    pub fn from_node(node: &SceneNode, options: ShapeOptions) -> Result<Self, SceneError> {
        if !node.has_geometry() {
            return Err(SceneError::MissingGeometry(node.name.clone()));
        }
        Ok(Self {
            source: node.name.clone(),
            options,
        })
    }

    /// Name of the node the shape was derived from
    pub fn source_node(&self) -> &str {
        &self.source
    }

    /// Effective derivation strategy, convex hull unless overridden
    pub fn shape_type(&self) -> ShapeType {
        self.options.shape_type.unwrap_or(ShapeType::ConvexHull)
    }

    pub fn collision_margin(&self) -> Option<f32> {
        self.options.collision_margin
    }
}

/// Whether a body is driven by the simulation or fixed in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Affected by forces and collisions
    Dynamic,
    /// Immovable; other bodies collide with it
    Static,
    /// Moved programmatically, unaffected by forces
    Kinematic,
}

/// A physics body ready to assign onto a node
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsBody {
    pub kind: BodyKind,
    pub shape: PhysicsShape,
}

impl PhysicsBody {
    pub fn new(kind: BodyKind, shape: PhysicsShape) -> Self {
        Self { kind, shape }
    }
}
