//! Playback configuration: array size, tick delay and selected algorithm
//!
//! All values that reach the driver pass through the validators here. The
//! user-facing speed control is the inverse of the delay: `speed = 101 - ms`.

use crate::catalog::Algorithm;
use std::time::Duration;
use thiserror::Error;

pub const SIZE_MIN: usize = 10;
pub const SIZE_MAX: usize = 100;
pub const SIZE_STEP: usize = 5;
pub const DEFAULT_SIZE: usize = 50;

pub const DELAY_MIN_MS: u64 = 1;
pub const DELAY_MAX_MS: u64 = 100;
pub const DEFAULT_DELAY_MS: u64 = 50;

/// Speed and delay are mirrored around this value
const SPEED_PIVOT: u64 = DELAY_MAX_MS + 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("array size {size} is outside {min}..={max}")]
    SizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("array size {size} is not a multiple of {step}")]
    SizeNotOnStep { size: usize, step: usize },

    #[error("delay {ms}ms is outside {min}..={max}ms")]
    DelayOutOfRange { ms: u64, min: u64, max: u64 },

    #[error("unknown algorithm '{0}' (expected one of bubble, merge, insertion, quick, selection, heap)")]
    UnknownAlgorithm(String),
}

pub fn validate_size(size: usize) -> Result<usize, ConfigError> {
    if !(SIZE_MIN..=SIZE_MAX).contains(&size) {
        return Err(ConfigError::SizeOutOfRange {
            size,
            min: SIZE_MIN,
            max: SIZE_MAX,
        });
    }
    if size % SIZE_STEP != 0 {
        return Err(ConfigError::SizeNotOnStep {
            size,
            step: SIZE_STEP,
        });
    }
    Ok(size)
}

pub fn validate_delay(delay: Duration) -> Result<Duration, ConfigError> {
    let ms = delay.as_millis() as u64;
    if !(DELAY_MIN_MS..=DELAY_MAX_MS).contains(&ms) {
        return Err(ConfigError::DelayOutOfRange {
            ms,
            min: DELAY_MIN_MS,
            max: DELAY_MAX_MS,
        });
    }
    Ok(Duration::from_millis(ms))
}

/// Clap value parser for `--size`
pub fn parse_size(arg: &str) -> Result<usize, String> {
    let size: usize = arg.parse().map_err(|e| format!("{}", e))?;
    validate_size(size).map_err(|e| e.to_string())
}

/// Clap value parser for `--delay-ms`
pub fn parse_delay(arg: &str) -> Result<Duration, String> {
    let ms: u64 = arg.parse().map_err(|e| format!("{}", e))?;
    validate_delay(Duration::from_millis(ms)).map_err(|e| e.to_string())
}

/// Settings of one player; changed only through the player so that each
/// change has its reset/regenerate side effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    pub size: usize,
    pub delay: Duration,
    pub algorithm: Algorithm,
}

impl PlaybackConfig {
    pub fn new(size: usize, delay: Duration, algorithm: Algorithm) -> Result<Self, ConfigError> {
        Ok(PlaybackConfig {
            size: validate_size(size)?,
            delay: validate_delay(delay)?,
            algorithm,
        })
    }

    /// User-facing speed in `1..=100`
    pub fn speed(&self) -> u64 {
        delay_to_speed(self.delay)
    }

    /// Speed multiplier shown next to the speed control, e.g. `"5x"`
    pub fn speed_label(&self) -> String {
        format!("{}x", (self.speed() as f64 / 10.0).round() as u64)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            size: DEFAULT_SIZE,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            algorithm: Algorithm::default(),
        }
    }
}

pub fn speed_to_delay(speed: u64) -> Duration {
    let speed = speed.clamp(DELAY_MIN_MS, DELAY_MAX_MS);
    Duration::from_millis(SPEED_PIVOT - speed)
}

pub fn delay_to_speed(delay: Duration) -> u64 {
    let ms = (delay.as_millis() as u64).clamp(DELAY_MIN_MS, DELAY_MAX_MS);
    SPEED_PIVOT - ms
}

/// Size one notch up or down, clamped to the allowed range
pub fn step_size(size: usize, up: bool) -> usize {
    let next = if up {
        size.saturating_add(SIZE_STEP)
    } else {
        size.saturating_sub(SIZE_STEP)
    };
    next.clamp(SIZE_MIN, SIZE_MAX)
}
