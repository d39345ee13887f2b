//! AR session lifecycle

use tracing::info;

/// World-tracking session configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTrackingConfig {
    /// Show statistics such as fps and timing information
    pub show_statistics: bool,
    /// Draw the world-origin axes
    pub show_world_origin: bool,
}

impl Default for WorldTrackingConfig {
    fn default() -> Self {
        Self {
            show_statistics: true,
            show_world_origin: true,
        }
    }
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Paused,
}

/// AR session lifecycle operations
///
/// Run when the view appears, pause when it disappears.
pub trait ArSession {
    /// Start or resume tracking with `config`
    fn run(&mut self, config: WorldTrackingConfig);

    /// Suspend tracking
    fn pause(&mut self);

    fn state(&self) -> SessionState;
}

/// In-process session used when no AR hardware is present
#[derive(Debug)]
pub struct SimulatedSession {
    state: SessionState,
    config: Option<WorldTrackingConfig>,
}

impl SimulatedSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            config: None,
        }
    }

    /// Configuration from the most recent `run`, if any
    pub fn config(&self) -> Option<&WorldTrackingConfig> {
        self.config.as_ref()
    }
}

impl Default for SimulatedSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ArSession for SimulatedSession {
    fn run(&mut self, config: WorldTrackingConfig) {
        info!(?config, "session running");
        self.config = Some(config);
        self.state = SessionState::Running;
    }

    fn pause(&mut self) {
        info!("session paused");
        self.state = SessionState::Paused;
    }

    fn state(&self) -> SessionState {
        self.state
    }
}
