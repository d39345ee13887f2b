//! Application framework for interactive scene demos
//!
//! Drives an [`ArApp`] with a simulated AR session and a terminal view: the
//! session runs while the view is on screen and pauses when it leaves, and
//! keyboard input stands in for the tap gesture during development.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::error::SceneError;
use crate::session::{ArSession, SimulatedSession, WorldTrackingConfig};

/// Input events delivered to an [`ArApp`]
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// User tapped the view
    Tap,
    /// Fallback keyboard input
    Key(KeyEvent),
    /// Regular tick
    Tick,
}

/// An interactive AR demo application
pub trait ArApp {
    /// Application state type
    type State;

    /// Called once before the session starts; loads assets and builds the
    /// scene. Failure here is fatal.
    fn init(&self) -> Result<Self::State, SceneError>;

    /// Handle an input event. `Ok(false)` quits; an error aborts the run.
    fn handle_event(
        &mut self,
        event: ViewEvent,
        state: &mut Self::State,
    ) -> Result<bool, SceneError>;

    /// Produce the text lines to draw this frame
    fn render(&self, state: &Self::State) -> Vec<String>;

    /// Session was interrupted (tracking lost); hardware-backed views call
    /// this, the simulated session never interrupts
    fn session_interrupted(&mut self, _state: &mut Self::State) {}

    /// Interruption ended; tracking resumed
    fn session_interruption_ended(&mut self, _state: &mut Self::State) {}

    /// An event handler failed; called just before the run aborts
    fn session_failed(&mut self, _state: &mut Self::State, _error: &SceneError) {}
}

/// Runner driving an [`ArApp`]
pub struct ArAppRunner<A: ArApp> {
    app: A,
    session: SimulatedSession,
    config: WorldTrackingConfig,
    tick_rate: Duration,
    running: bool,
}

impl<A: ArApp> ArAppRunner<A> {
    /// Create a new app runner
    pub fn new(app: A) -> Self {
        Self {
            app,
            session: SimulatedSession::new(),
            config: WorldTrackingConfig::default(),
            tick_rate: Duration::from_millis(100),
            running: true,
        }
    }

    /// Set tick rate
    pub fn with_tick_rate(mut self, rate: Duration) -> Self {
        self.tick_rate = rate;
        self
    }

    /// Set the session configuration used when the view appears
    pub fn with_config(mut self, config: WorldTrackingConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the application until it quits or fails
    pub fn run(&mut self) -> io::Result<()> {
        // Load assets and build the scene before anything is shown
        let mut state = self
            .app
            .init()
            .map_err(|e| io::Error::other(e.to_string()))?;

        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;

        // The view is now on screen
        self.session.run(self.config);

        let result = self.event_loop(&mut state);

        // The view is leaving the screen
        self.session.pause();

        execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;

        result
    }

    fn event_loop(&mut self, state: &mut A::State) -> io::Result<()> {
        let mut last_tick = Instant::now();

        while self.running {
            let timeout = self
                .tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_default();

            if event::poll(timeout)? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        self.running = false;
                        continue;
                    }

                    // Space and Enter simulate the tap gesture
                    let view_event = match key.code {
                        KeyCode::Char(' ') | KeyCode::Enter => ViewEvent::Tap,
                        _ => ViewEvent::Key(key),
                    };
                    self.dispatch(view_event, state)?;
                }
            }

            if last_tick.elapsed() >= self.tick_rate {
                self.dispatch(ViewEvent::Tick, state)?;
                self.draw(state)?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, view_event: ViewEvent, state: &mut A::State) -> io::Result<()> {
        match self.app.handle_event(view_event, state) {
            Ok(true) => Ok(()),
            Ok(false) => {
                self.running = false;
                Ok(())
            }
            Err(e) => {
                self.app.session_failed(state, &e);
                Err(io::Error::other(e.to_string()))
            }
        }
    }

    fn draw(&mut self, state: &A::State) -> io::Result<()> {
        let mut stdout = io::stdout();
        queue!(stdout, Clear(ClearType::All))?;

        let mut row: u16 = 0;
        if self.config.show_statistics {
            let status = format!(
                "session: {:?} | tick: {:?}",
                self.session.state(),
                self.tick_rate
            );
            queue!(stdout, cursor::MoveTo(0, row), Print(status))?;
            row += 2;
        }

        for line in self.app.render(state) {
            queue!(stdout, cursor::MoveTo(0, row), Print(line))?;
            row += 1;
        }

        stdout.flush()
    }
}
