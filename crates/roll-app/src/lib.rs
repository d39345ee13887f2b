//! roll-app: ball rolls down an inclined plane
//!
//! Builds a tiny static scene (an inclined plane and a ball) from a
//! declarative descriptor tree, materializes it once at startup, and attaches
//! physics bodies to both nodes on tap so gravity can roll the ball down the
//! plane. The whole setup is tilted -5 degrees about z.
//!
//! Controls (simulating the AR view):
//! - Space or Enter: tap (attach physics bodies)
//! - q or Esc: quit

mod handlers;
mod setup;
mod state;
mod ui;

use std::time::Duration;

use roll_scene::app::{ArApp, ArAppRunner, ViewEvent};
use roll_scene::{SceneError, WorldTrackingConfig};

use handlers::handle_event;
use state::DemoState;
use ui::render_demo;

/// The rolling-ball demo application
pub struct RollDemo;

impl ArApp for RollDemo {
    type State = DemoState;

    fn init(&self) -> Result<DemoState, SceneError> {
        DemoState::new()
    }

    fn handle_event(
        &mut self,
        event: ViewEvent,
        state: &mut DemoState,
    ) -> Result<bool, SceneError> {
        handle_event(event, state)
    }

    fn render(&self, state: &DemoState) -> Vec<String> {
        render_demo(state)
    }
}

/// Run the demo application
pub fn run_demo() -> std::io::Result<()> {
    let app = RollDemo;
    let mut runner = ArAppRunner::new(app)
        .with_tick_rate(Duration::from_millis(100))
        .with_config(WorldTrackingConfig::default());

    runner.run()
}
