//! Per-instance slider configuration.

use std::time::Duration;

use crate::constants::{DEFAULT_AUTOPLAY_INTERVAL, TRANSITION_LOCK};
use crate::error::SliderError;

/// Timing configuration for one slider instance.
///
/// The transition lock is not configurable: it matches the visual crossfade
/// the renderer paints, so both sides read it from [`TRANSITION_LOCK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderConfig {
    autoplay_interval: Duration,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL,
        }
    }
}

impl SliderConfig {
    /// Builds a configuration with the given autoplay interval.
    pub fn new(autoplay_interval: Duration) -> Result<Self, SliderError> {
        Self::default().with_autoplay_interval(autoplay_interval)
    }

    pub fn with_autoplay_interval(mut self, interval: Duration) -> Result<Self, SliderError> {
        validate_interval(interval)?;
        self.autoplay_interval = interval;
        Ok(self)
    }

    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        self.autoplay_interval
    }

    #[must_use]
    pub fn transition_lock(&self) -> Duration {
        TRANSITION_LOCK
    }
}

/// Shortest accepted autoplay period.
pub const MIN_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(1);

pub(crate) fn validate_interval(interval: Duration) -> Result<(), SliderError> {
    if interval < MIN_AUTOPLAY_INTERVAL {
        return Err(SliderError::InvalidInterval { interval });
    }
    Ok(())
}
