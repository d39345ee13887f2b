//! Demo application state

use tracing::info;

use roll_scene::{build, Scene, SceneError};

use crate::setup::setup_descriptor;

/// State for the rolling-ball demo
#[derive(Debug)]
pub struct DemoState {
    pub scene: Scene,
    pub tap_count: u32,
    pub status_message: Option<String>,
}

impl DemoState {
    /// Load the empty scene asset and materialize the setup tree into it
    pub fn new() -> Result<Self, SceneError> {
        let mut scene = Scene::from_asset("empty")?;
        let node = build(&setup_descriptor());
        scene.root_node_mut().add_child(node);
        info!("scene materialized");

        Ok(Self {
            scene,
            tap_count: 0,
            status_message: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_attaches_setup_to_scene_root() {
        let state = DemoState::new().unwrap();
        let root = state.scene.root_node();
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children()[0].name, "Setup");
        assert!(root.child_node("ball", true).is_some());
        assert_eq!(state.tap_count, 0);
    }
}
