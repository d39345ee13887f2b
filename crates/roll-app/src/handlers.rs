//! Demo event handlers

use crossterm::event::KeyCode;
use tracing::info;

use roll_scene::app::ViewEvent;
use roll_scene::{
    BodyKind, PhysicsBody, PhysicsShape, Scene, SceneError, ShapeOptions, ShapeType,
};

use crate::state::DemoState;

/// Collision margin for the ball's physics shape
const BALL_COLLISION_MARGIN: f32 = 0.006;

pub fn handle_event(event: ViewEvent, state: &mut DemoState) -> Result<bool, SceneError> {
    match event {
        ViewEvent::Tap => {
            apply_physics(&mut state.scene)?;
            state.tap_count += 1;
            state.status_message = Some(format!("physics bodies attached (tap {})", state.tap_count));
            info!(taps = state.tap_count, "physics bodies attached");
            Ok(true)
        }
        ViewEvent::Key(key) => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Ok(false),
            _ => Ok(true),
        },
        ViewEvent::Tick => Ok(true),
    }
}

/// Attach physics bodies to the ball and the inclined plane.
///
/// Runs unconditionally on every tap: shapes and bodies are re-created and
/// replace whatever was attached before. Either node missing is fatal.
pub fn apply_physics(scene: &mut Scene) -> Result<(), SceneError> {
    let root = scene.root_node_mut();

    let ball = root
        .child_node_mut("ball", true)
        .ok_or_else(|| SceneError::NodeNotFound("ball".to_string()))?;
    let ball_shape = PhysicsShape::from_node(
        ball,
        ShapeOptions::new().with_collision_margin(BALL_COLLISION_MARGIN),
    )?;
    ball.set_physics_body(PhysicsBody::new(BodyKind::Dynamic, ball_shape));

    let plane = root
        .child_node_mut("inclined plane", true)
        .ok_or_else(|| SceneError::NodeNotFound("inclined plane".to_string()))?;
    let plane_shape = PhysicsShape::from_node(
        plane,
        ShapeOptions::new().with_shape_type(ShapeType::ConcavePolyhedron),
    )?;
    plane.set_physics_body(PhysicsBody::new(BodyKind::Static, plane_shape));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_attaches_bodies() {
        let mut state = DemoState::new().unwrap();
        assert!(handle_event(ViewEvent::Tap, &mut state).unwrap());

        let root = state.scene.root_node();
        let ball_body = root
            .child_node("ball", true)
            .unwrap()
            .physics_body
            .as_ref()
            .unwrap();
        assert_eq!(ball_body.kind, BodyKind::Dynamic);
        assert_eq!(ball_body.shape.collision_margin(), Some(0.006));
        assert_eq!(ball_body.shape.shape_type(), ShapeType::ConvexHull);

        let plane_body = root
            .child_node("inclined plane", true)
            .unwrap()
            .physics_body
            .as_ref()
            .unwrap();
        assert_eq!(plane_body.kind, BodyKind::Static);
        assert_eq!(plane_body.shape.shape_type(), ShapeType::ConcavePolyhedron);
        assert_eq!(plane_body.shape.collision_margin(), None);

        assert_eq!(state.tap_count, 1);
    }

    #[test]
    fn test_retap_recreates_bodies() {
        // No deduplication guard: every tap re-attaches
        let mut state = DemoState::new().unwrap();
        handle_event(ViewEvent::Tap, &mut state).unwrap();
        handle_event(ViewEvent::Tap, &mut state).unwrap();
        assert_eq!(state.tap_count, 2);
        assert!(state
            .scene
            .root_node()
            .child_node("ball", true)
            .unwrap()
            .physics_body
            .is_some());
    }

    #[test]
    fn test_tap_without_ball_fails() {
        let mut scene = Scene::new();
        let err = apply_physics(&mut scene).unwrap_err();
        assert_eq!(err, SceneError::NodeNotFound("ball".to_string()));
    }

    #[test]
    fn test_quit_keys() {
        use crossterm::event::KeyEvent;

        let mut state = DemoState::new().unwrap();
        let quit = handle_event(
            ViewEvent::Key(KeyEvent::from(KeyCode::Char('q'))),
            &mut state,
        )
        .unwrap();
        assert!(!quit);

        let stay = handle_event(
            ViewEvent::Key(KeyEvent::from(KeyCode::Char('x'))),
            &mut state,
        )
        .unwrap();
        assert!(stay);
    }
}
