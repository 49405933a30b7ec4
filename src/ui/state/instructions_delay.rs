// SPDX-License-Identifier: MPL-2.0
//! Delay before the controls hint hides.
//!
//! Wraps the configured milliseconds in a type that is always inside the
//! supported range.

use crate::config::{
    DEFAULT_INSTRUCTIONS_DELAY_MS, MAX_INSTRUCTIONS_DELAY_MS, MIN_INSTRUCTIONS_DELAY_MS,
};
use std::time::Duration;

/// Instructions auto-hide delay in milliseconds.
///
/// # Example
///
/// ```
/// use model_lens::ui::state::InstructionsDelay;
///
/// let delay = InstructionsDelay::new(5000);
/// assert_eq!(delay.value(), 5000);
///
/// // Values outside the range are clamped
/// assert_eq!(InstructionsDelay::new(10).value(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionsDelay(u64);

impl InstructionsDelay {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_INSTRUCTIONS_DELAY_MS, MAX_INSTRUCTIONS_DELAY_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for InstructionsDelay {
    fn default() -> Self {
        Self(DEFAULT_INSTRUCTIONS_DELAY_MS)
    }
}

impl From<Option<u64>> for InstructionsDelay {
    fn from(value: Option<u64>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }
}
