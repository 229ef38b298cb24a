//! Main TUI application state and logic

use crate::config;
use crate::generate::ArrayGenerator;
use crate::playback::{Player, TickOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Upper bound on how long the loop blocks waiting for input
const MAX_POLL: Duration = Duration::from_millis(50);

/// Speed points added or removed per `+`/`-` press
const SPEED_NOTCH: u64 = 10;

/// The main application state
pub struct App {
    /// Playback driver: array, engine, highlight state
    pub player: Player,

    /// Source of new unsorted arrays
    generator: Box<dyn ArrayGenerator>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(player: Player, generator: Box<dyn ArrayGenerator>) -> Self {
        App {
            player,
            generator,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Fire the scheduled tick, at most one step per frame
            if let Some(outcome) = self.player.poll(Instant::now()) {
                self.status_message = match outcome {
                    TickOutcome::Applied(_) => "Playing...".to_string(),
                    TickOutcome::Finished => {
                        format!("Sorted in {} steps", self.player.steps_applied())
                    }
                };
            }

            // Wake up in time for the next tick
            let timeout = self
                .player
                .next_tick()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                .unwrap_or(MAX_POLL)
                .min(MAX_POLL);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Bars on top, controls below, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(10),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_bars_pane(frame, chunks[0], &self.player);
        super::panes::render_controls_pane(frame, chunks[1], &self.player);
        super::panes::render_status_bar(frame, chunks[2], &self.status_message, &self.player);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle play/pause (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.player.toggle(Instant::now());
                    self.status_message = if self.player.is_running() {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Right => match self.player.step() {
                Some(TickOutcome::Applied(step)) => {
                    self.status_message = format!("Stepped: {}", step);
                }
                Some(TickOutcome::Finished) => {
                    self.status_message =
                        format!("Sorted in {} steps", self.player.steps_applied());
                }
                None => {
                    self.status_message = "Already sorted, press space to replay".to_string();
                }
            },
            KeyCode::Enter => {
                let skipped = self.player.skip_to_end();
                self.status_message = format!("Jumped to end ({} steps skipped)", skipped);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if self.refuse_while_running("reset") {
                    return;
                }
                self.player.reset();
                self.status_message = "Reset to the unsorted array".to_string();
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                if self.refuse_while_running("generate a new array") {
                    return;
                }
                self.player.regenerate(self.generator.as_mut());
                self.status_message = "Generated a new array".to_string();
            }
            KeyCode::Tab => {
                let next = self.player.algorithm().next();
                self.select_algorithm(next);
            }
            KeyCode::BackTab => {
                let prev = self.player.algorithm().prev();
                self.select_algorithm(prev);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.change_speed(true);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.change_speed(false);
            }
            KeyCode::Char(']') => self.change_size(true),
            KeyCode::Char('[') => self.change_size(false),
            _ => {}
        }
    }

    /// Mirror the disabled buttons of a running player
    fn refuse_while_running(&mut self, action: &str) -> bool {
        if self.player.is_running() {
            self.status_message = format!("Pause before you {}", action);
            return true;
        }
        false
    }

    fn select_algorithm(&mut self, algorithm: crate::catalog::Algorithm) {
        match self.player.set_algorithm(algorithm) {
            Ok(()) => self.status_message = format!("Selected {}", algorithm.name()),
            Err(e) => self.status_message = format!("Cannot switch: {}", e),
        }
    }

    fn change_speed(&mut self, faster: bool) {
        let speed = self.player.config().speed();
        let target = if faster {
            speed.saturating_add(SPEED_NOTCH)
        } else {
            speed.saturating_sub(SPEED_NOTCH)
        };
        let delay = config::speed_to_delay(target);
        match self.player.set_delay(delay) {
            Ok(()) => {
                self.status_message = format!(
                    "Speed {} ({}ms per step)",
                    self.player.config().speed_label(),
                    delay.as_millis()
                );
            }
            Err(e) => self.status_message = format!("Error: {}", e),
        }
    }

    fn change_size(&mut self, up: bool) {
        if self.refuse_while_running("resize the array") {
            return;
        }
        let size = config::step_size(self.player.config().size, up);
        match self.player.set_size(size, self.generator.as_mut()) {
            Ok(()) => self.status_message = format!("Array size {}", size),
            Err(e) => self.status_message = format!("Error: {}", e),
        }
    }
}
