//! Runtime scene-graph nodes

use crate::geometry::Geometry;
use crate::physics::PhysicsBody;
use crate::spatial::Transform;

/// An engine-owned scene-graph node
///
/// Owns its children in insertion order. Physics bodies are the only part of
/// a node that mutates after materialization.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub geometry: Option<Geometry>,
    pub physics_body: Option<PhysicsBody>,
    children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create a bare node with an identity transform
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            geometry: None,
            physics_body: None,
            children: Vec::new(),
        }
    }

    /// Attach a child node, after any existing children
    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// The node's children, in attachment order
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// Find the first node below this one with the given name, depth-first.
    ///
    /// With `recursively` false only direct children are searched.
    pub fn child_node(&self, name: &str, recursively: bool) -> Option<&SceneNode> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if recursively {
                if let Some(found) = child.child_node(name, true) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Mutable variant of [`SceneNode::child_node`]
    pub fn child_node_mut(&mut self, name: &str, recursively: bool) -> Option<&mut SceneNode> {
        for child in &mut self.children {
            if child.name == name {
                return Some(child);
            }
            if recursively {
                if let Some(found) = child.child_node_mut(name, true) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Assign a physics body, replacing any existing one
    pub fn set_physics_body(&mut self, body: PhysicsBody) {
        self.physics_body = Some(body);
    }

    /// Whether this node or any descendant carries geometry
    pub(crate) fn has_geometry(&self) -> bool {
        self.geometry.is_some() || self.children.iter().any(SceneNode::has_geometry)
    }
}
