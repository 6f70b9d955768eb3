// SPDX-License-Identifier: MPL-2.0
//! Countdown decomposition for the "time until the celebration" panel.
//!
//! The panel re-renders at most once per second. Once the target timestamp
//! has passed, the decomposition clamps at zero; the view swaps the digits
//! for a "celebration underway" banner instead of counting negative.

use chrono::NaiveDateTime;

/// Whole-unit breakdown of the time left until the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    /// Decomposes the span from `now` to `target`, clamping at zero.
    #[must_use]
    pub fn between(now: NaiveDateTime, target: NaiveDateTime) -> Self {
        let total = (target - now).num_seconds().max(0) as u64;
        Self {
            days: total / 86_400,
            hours: (total / 3_600) % 24,
            minutes: (total / 60) % 60,
            seconds: total % 60,
        }
    }

    /// Whether the event has started (or passed).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// True once `now` has reached the event start.
#[must_use]
pub fn has_started(now: NaiveDateTime, target: NaiveDateTime) -> bool {
    now >= target
}
