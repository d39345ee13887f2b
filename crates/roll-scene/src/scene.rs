//! Scene container and asset loading

use crate::error::SceneError;
use crate::node::SceneNode;

/// Scene assets known to the facade
const KNOWN_ASSETS: &[&str] = &["empty"];

/// A scene: a root node plus everything attached beneath it
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    root: SceneNode,
}

impl Scene {
    /// An empty scene with a bare root node
    pub fn new() -> Self {
        Self {
            root: SceneNode::new("root"),
        }
    }

    /// Load a named scene asset.
    ///
    /// Unknown asset names fail fast; a missing asset at startup is an
    /// authoring mistake.
    pub fn from_asset(name: &str) -> Result<Self, SceneError> {
        if KNOWN_ASSETS.contains(&name) {
            Ok(Self::new())
        } else {
            Err(SceneError::AssetLoad(name.to_string()))
        }
    }

    pub fn root_node(&self) -> &SceneNode {
        &self.root
    }

    pub fn root_node_mut(&mut self) -> &mut SceneNode {
        &mut self.root
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
