//! Per-item outcomes and the aggregated batch result.

use pricer_core::{FailureKind, PriceAdjustment};
use serde::Serialize;
use std::fmt;

/// Lifecycle of one batch run.
///
/// ```text
/// idle → running → completed   (at least one update succeeded)
///                → failed      (no update succeeded)
/// ```
///
/// A batch over an empty item set never leaves `idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchState {
    Idle,
    Running,
    Completed,
    Failed,
}

impl BatchState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Running],
            Self::Running => &[Self::Completed, Self::Failed],
            Self::Completed | Self::Failed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }
}

impl fmt::Display for BatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to one item's update. There is no partial state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateStatus {
    Updated { price: f64 },
    Failed { kind: FailureKind, reason: String },
}

/// Outcome of the update attempted for a single item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateOutcome {
    pub item_id: u64,
    pub title: String,
    pub previous_price: f64,
    pub requested_price: f64,
    #[serde(flatten)]
    pub status: UpdateStatus,
}

impl UpdateOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, UpdateStatus::Updated { .. })
    }
}

/// Aggregate of one batch run, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub state: BatchState,
    pub percentage: f64,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<UpdateOutcome>,
}

impl BatchResult {
    pub(crate) fn idle(adjustment: PriceAdjustment) -> Self {
        Self {
            state: BatchState::Idle,
            percentage: adjustment.percentage(),
            succeeded: 0,
            failed: 0,
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn from_outcomes(adjustment: PriceAdjustment, outcomes: Vec<UpdateOutcome>) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        let failed = outcomes.len() - succeeded;
        let state = if succeeded > 0 {
            BatchState::Completed
        } else {
            BatchState::Failed
        };
        Self {
            state,
            percentage: adjustment.percentage(),
            succeeded,
            failed,
            outcomes,
        }
    }

    /// Number of items the batch attempted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Human-readable one-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.state {
            BatchState::Idle | BatchState::Running => String::from("No items to update."),
            BatchState::Failed => String::from("Failed to update any prices. Please try again."),
            BatchState::Completed if self.failed == 0 => format!(
                "Successfully updated {} item prices by {}%.",
                self.succeeded, self.percentage
            ),
            BatchState::Completed => format!(
                "Successfully updated {} item prices by {}%; {} failed.",
                self.succeeded, self.percentage, self.failed
            ),
        }
    }
}
