//! Transition scheduling
//!
//! GPUI gives no callback for "the transition animation has finished", so the
//! router waits a fixed settle duration per [`RoutingDirection`] instead. While
//! one transition is settling the [`TransitionGate`] stays closed and any new
//! request is dropped, never queued: a queued transition would fire long after
//! the interaction that caused it.

use std::time::Duration;

/// The kind of step a transition performs, which decides its settle duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingDirection {
    /// Push or pop.
    Horizontal,
    /// Present or dismiss.
    Vertical,
    /// A state change that is not animated; the gate reopens immediately.
    Untimed,
    /// An explicit settle duration.
    Custom(Duration),
}

impl RoutingDirection {
    /// A custom direction from seconds.
    ///
    /// # Panics
    ///
    /// Panics if `seconds` is negative or not finite.
    pub fn custom_secs(seconds: f64) -> Self {
        assert!(
            seconds.is_finite() && seconds >= 0.0,
            "Custom settle duration must be a non-negative number of seconds, got {seconds}"
        );
        Self::Custom(Duration::from_secs_f64(seconds))
    }

    /// Settle duration for this direction under `durations`.
    pub fn duration(&self, durations: &TransitionDurations) -> Duration {
        match self {
            Self::Horizontal => durations.horizontal,
            Self::Vertical => durations.vertical,
            Self::Untimed => Duration::ZERO,
            Self::Custom(duration) => *duration,
        }
    }

    /// Horizontal when exactly one view appears or disappears, untimed otherwise.
    pub fn horizontal_if_single(before: usize, after: usize) -> Self {
        if before.abs_diff(after) == 1 {
            Self::Horizontal
        } else {
            Self::Untimed
        }
    }
}

/// Settle durations of the animated directions.
///
/// The defaults match the platform's stock push and modal animations; they
/// are estimates and may need tuning when that timing changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDurations {
    /// Settle time of a push or pop.
    pub horizontal: Duration,
    /// Settle time of a present or dismiss.
    pub vertical: Duration,
}

impl TransitionDurations {
    /// Default settle time of a push or pop.
    pub const DEFAULT_HORIZONTAL: Duration = Duration::from_millis(550);
    /// Default settle time of a present or dismiss.
    pub const DEFAULT_VERTICAL: Duration = Duration::from_millis(500);

    /// Create durations for both directions.
    pub fn new(horizontal: Duration, vertical: Duration) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Override the horizontal settle time.
    pub fn with_horizontal(mut self, horizontal: Duration) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Override the vertical settle time.
    pub fn with_vertical(mut self, vertical: Duration) -> Self {
        self.vertical = vertical;
        self
    }
}

impl Default for TransitionDurations {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HORIZONTAL, Self::DEFAULT_VERTICAL)
    }
}

/// Proof of holding the gate, needed to reopen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTicket(u64);

/// Binary gate allowing one transition in flight at a time.
///
/// Each close hands out a fresh [`TransitionTicket`]; only the ticket of the
/// current transition reopens the gate, so a late release of an older
/// transition never opens the gate under a newer one.
#[derive(Debug, Default)]
pub struct TransitionGate {
    closed_by: Option<u64>,
    transition_id: u64,
}

impl TransitionGate {
    /// Create an open gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a new transition would be accepted.
    pub fn is_open(&self) -> bool {
        self.closed_by.is_none()
    }

    /// Close the gate for a new transition. Returns `None` if already closed.
    pub fn try_close(&mut self) -> Option<TransitionTicket> {
        if self.closed_by.is_some() {
            return None;
        }
        self.transition_id += 1;
        self.closed_by = Some(self.transition_id);
        Some(TransitionTicket(self.transition_id))
    }

    /// Reopen the gate if `ticket` belongs to the transition holding it.
    ///
    /// Returns whether the gate was reopened by this call.
    pub fn release(&mut self, ticket: TransitionTicket) -> bool {
        if self.closed_by == Some(ticket.0) {
            self.closed_by = None;
            true
        } else {
            false
        }
    }
}
