//! Playback driver
//!
//! [`Player`] owns the visible working array, the current engine and the
//! highlight state. It is a small state machine:
//!
//! ```text
//! Idle --start--> Running --pause--> Paused --start--> Running
//!                    |                  |
//!                    +--(exhausted)--> Finished --start--> (reset) Running
//! any --reset--> Idle
//! ```
//!
//! Ticks are scheduled as deadlines rather than timers: the caller passes the
//! current [`Instant`] to [`Player::poll`], which consumes at most one step
//! when the deadline has passed. Cancelling a tick is clearing the deadline,
//! so no stale tick can fire after a pause or reset.

use crate::catalog::Algorithm;
use crate::config::{self, ConfigError, PlaybackConfig};
use crate::engine::Engine;
use crate::generate::ArrayGenerator;
use crate::highlight::Highlight;
use crate::step::{Step, Value};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, trace};

/// Bars are scaled against at least this value so short arrays don't fill the pane
const MIN_SCALE: Value = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No engine; the unsorted snapshot is shown
    Idle,
    /// Engine active, next tick scheduled
    Running,
    /// Engine retained mid-run, nothing scheduled
    Paused,
    /// Engine exhausted; terminal until reset or replay
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("cannot {0} while playback is running")]
    Running(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result of consuming one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The step was applied to the array and highlight state
    Applied(Step),
    /// The engine had no more steps; the player is now finished
    Finished,
}

#[derive(Debug)]
pub struct Player {
    config: PlaybackConfig,
    /// Last generated unsorted array, restored on reset
    snapshot: Vec<Value>,
    array: Vec<Value>,
    engine: Option<Engine>,
    highlight: Highlight,
    state: PlaybackState,
    next_tick: Option<Instant>,
    applied: usize,
    last_step: Option<Step>,
}

impl Player {
    /// Create an idle player showing `snapshot`
    pub fn new(config: PlaybackConfig, snapshot: Vec<Value>) -> Self {
        Player {
            config,
            array: snapshot.clone(),
            snapshot,
            engine: None,
            highlight: Highlight::new(),
            state: PlaybackState::Idle,
            next_tick: None,
            applied: 0,
            last_step: None,
        }
    }

    /// Create an idle player over a freshly generated array of `config.size`
    pub fn generated(config: PlaybackConfig, generator: &mut dyn ArrayGenerator) -> Self {
        let snapshot = generator.generate(config.size);
        Self::new(config, snapshot)
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    /// The visible working array
    pub fn array(&self) -> &[Value] {
        &self.array
    }

    /// The unsorted array a reset returns to
    pub fn snapshot(&self) -> &[Value] {
        &self.snapshot
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    /// Steps consumed since the run started
    pub fn steps_applied(&self) -> usize {
        self.applied
    }

    pub fn last_step(&self) -> Option<&Step> {
        self.last_step.as_ref()
    }

    /// Deadline of the pending tick, if one is scheduled
    pub fn next_tick(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Value that maps to a full-height bar; fixed for the life of a snapshot
    pub fn scale(&self) -> Value {
        self.snapshot
            .iter()
            .copied()
            .max()
            .unwrap_or(MIN_SCALE)
            .max(MIN_SCALE)
    }

    /// Start or resume playback. From `Finished` this replays from the snapshot.
    pub fn start(&mut self, now: Instant) {
        match self.state {
            PlaybackState::Running => {}
            PlaybackState::Finished => {
                self.reset();
                self.start(now);
            }
            PlaybackState::Idle | PlaybackState::Paused => {
                self.ensure_engine();
                self.state = PlaybackState::Running;
                self.schedule(now);
                debug!(
                    algorithm = self.config.algorithm.id(),
                    applied = self.applied,
                    "playback running"
                );
            }
        }
    }

    /// Stop scheduling ticks, keeping the engine and array exactly as they are
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Running {
            self.next_tick = None;
            self.state = PlaybackState::Paused;
            debug!(applied = self.applied, "playback paused");
        }
    }

    /// Play/pause button
    pub fn toggle(&mut self, now: Instant) {
        if self.is_running() {
            self.pause();
        } else {
            self.start(now);
        }
    }

    /// Discard the engine and return to the unsorted snapshot
    pub fn reset(&mut self) {
        self.next_tick = None;
        self.engine = None;
        self.array.clone_from(&self.snapshot);
        self.highlight.clear();
        self.applied = 0;
        self.last_step = None;
        self.state = PlaybackState::Idle;
        debug!(len = self.array.len(), "playback reset");
    }

    /// Replace the snapshot with a freshly generated array, then reset
    pub fn regenerate(&mut self, generator: &mut dyn ArrayGenerator) {
        self.snapshot = generator.generate(self.config.size);
        self.reset();
    }

    /// Switch algorithms; only allowed while not running
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<(), PlaybackError> {
        if self.is_running() {
            return Err(PlaybackError::Running("change algorithm"));
        }
        self.config.algorithm = algorithm;
        self.reset();
        Ok(())
    }

    /// Change the array size, which regenerates the snapshot
    pub fn set_size(
        &mut self,
        size: usize,
        generator: &mut dyn ArrayGenerator,
    ) -> Result<(), PlaybackError> {
        self.config.size = config::validate_size(size)?;
        self.regenerate(generator);
        Ok(())
    }

    /// Change the tick delay. A tick that is already scheduled keeps its
    /// deadline; every tick scheduled afterwards uses the new delay.
    pub fn set_delay(&mut self, delay: Duration) -> Result<(), PlaybackError> {
        self.config.delay = config::validate_delay(delay)?;
        Ok(())
    }

    /// Fire the pending tick if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        match self.next_tick {
            Some(deadline) if self.is_running() && now >= deadline => self.tick(now),
            _ => None,
        }
    }

    /// Consume one step while running and schedule the next tick.
    ///
    /// Returns `None` when the player is not running.
    pub fn tick(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.is_running() {
            return None;
        }
        let outcome = self.advance();
        if self.is_running() {
            self.schedule(now);
        }
        Some(outcome)
    }

    /// Consume exactly one step by hand. Running playback is paused first;
    /// a finished run stays finished.
    pub fn step(&mut self) -> Option<TickOutcome> {
        match self.state {
            PlaybackState::Finished => None,
            PlaybackState::Running | PlaybackState::Idle | PlaybackState::Paused => {
                self.pause();
                self.ensure_engine();
                self.state = PlaybackState::Paused;
                Some(self.advance())
            }
        }
    }

    /// Consume every remaining step without scheduling
    pub fn skip_to_end(&mut self) -> usize {
        let before = self.applied;
        while let Some(TickOutcome::Applied(_)) = self.step() {}
        self.applied - before
    }

    fn ensure_engine(&mut self) {
        if self.engine.is_none() {
            self.engine = Some(self.config.algorithm.engine(&self.array));
        }
    }

    fn schedule(&mut self, now: Instant) {
        self.next_tick = Some(now + self.config.delay);
    }

    /// Pull one step and apply it, or finish when the engine is exhausted
    fn advance(&mut self) -> TickOutcome {
        match self.engine.as_mut().and_then(Engine::next_step) {
            Some(step) => {
                self.apply(&step);
                TickOutcome::Applied(step)
            }
            None => {
                self.finish();
                TickOutcome::Finished
            }
        }
    }

    fn apply(&mut self, step: &Step) {
        step.replay(&mut self.array);
        self.highlight.apply(step);
        self.applied += 1;
        self.last_step = Some(step.clone());
        trace!(applied = self.applied, %step, "step applied");
    }

    fn finish(&mut self) {
        self.next_tick = None;
        self.engine = None;
        self.highlight.clear_transient();
        self.state = PlaybackState::Finished;
        debug!(
            algorithm = self.config.algorithm.id(),
            steps = self.applied,
            "playback finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::FixedArray;

    fn player(values: &[Value]) -> Player {
        Player::new(PlaybackConfig::default(), values.to_vec())
    }

    #[test]
    fn test_start_schedules_after_delay() {
        let mut p = player(&[3, 1, 2]);
        let now = Instant::now();
        p.start(now);
        assert_eq!(p.state(), PlaybackState::Running);
        assert_eq!(p.next_tick(), Some(now + p.config().delay));
        assert_eq!(p.poll(now), None);
        assert!(p.poll(now + p.config().delay).is_some());
        assert_eq!(p.steps_applied(), 1);
    }

    #[test]
    fn test_pause_cancels_pending_tick() {
        let mut p = player(&[3, 1, 2]);
        let now = Instant::now();
        p.start(now);
        p.pause();
        assert_eq!(p.next_tick(), None);
        assert_eq!(p.poll(now + Duration::from_secs(5)), None);
        assert_eq!(p.steps_applied(), 0);
    }

    #[test]
    fn test_reset_restores_snapshot() {
        let mut p = player(&[3, 1, 2]);
        p.skip_to_end();
        assert_eq!(p.array(), &[1, 2, 3]);
        p.reset();
        assert_eq!(p.state(), PlaybackState::Idle);
        assert_eq!(p.array(), &[3, 1, 2]);
        assert_eq!(p.highlight(), &Highlight::new());
        assert_eq!(p.steps_applied(), 0);
    }

    #[test]
    fn test_algorithm_change_rejected_while_running() {
        let mut p = player(&[3, 1, 2]);
        p.start(Instant::now());
        assert_eq!(
            p.set_algorithm(Algorithm::Heap),
            Err(PlaybackError::Running("change algorithm"))
        );
        p.pause();
        p.set_algorithm(Algorithm::Heap).unwrap();
        assert_eq!(p.algorithm(), Algorithm::Heap);
        assert_eq!(p.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_replay_after_finished() {
        let mut p = player(&[2, 1]);
        p.skip_to_end();
        assert_eq!(p.state(), PlaybackState::Finished);

        let now = Instant::now();
        p.start(now);
        assert_eq!(p.state(), PlaybackState::Running);
        assert_eq!(p.array(), &[2, 1]);
        assert_eq!(p.steps_applied(), 0);
    }

    #[test]
    fn test_set_size_regenerates() {
        let mut p = player(&[3, 1, 2]);
        let mut generator = FixedArray(vec![9; 15]);
        p.set_size(15, &mut generator).unwrap();
        assert_eq!(p.config().size, 15);
        assert_eq!(p.snapshot(), &[9; 15][..]);
        assert!(matches!(
            p.set_size(12, &mut generator),
            Err(PlaybackError::Config(ConfigError::SizeNotOnStep { .. }))
        ));
    }

    #[test]
    fn test_delay_change_applies_to_next_schedule() {
        let mut p = player(&[3, 1, 2]);
        let now = Instant::now();
        p.start(now);
        let first = now + Duration::from_millis(50);
        assert_eq!(p.next_tick(), Some(first));

        p.set_delay(Duration::from_millis(10)).unwrap();
        assert_eq!(p.next_tick(), Some(first));
        p.poll(first);
        assert_eq!(p.next_tick(), Some(first + Duration::from_millis(10)));
    }

    #[test]
    fn test_finish_clears_transient_highlight() {
        let mut p = player(&[4, 2, 9, 1]);
        p.skip_to_end();
        assert!(p.highlight().comparing().is_empty());
        assert!(p.highlight().swapping().is_empty());
        assert_eq!(p.highlight().sorted_count(), 4);
        assert_eq!(p.step(), None);
    }

    #[test]
    fn test_scale_has_floor() {
        assert_eq!(player(&[3, 1, 2]).scale(), 100);
        assert_eq!(player(&[3, 180, 2]).scale(), 180);
        assert_eq!(player(&[]).scale(), 100);
    }
}
