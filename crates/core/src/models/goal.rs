use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a capital goal.
///
/// Transitions between statuses are external events handled by the goal
/// collaborator; the core only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    /// Goal is being actively pursued
    Active,
    /// Temporarily on hold; calendar projection still applies
    Paused,
    /// Target capital was reached
    Completed,
    /// Abandoned by the user
    Cancelled,
}

impl GoalStatus {
    /// Whether a goal in this status still drives calendar projections.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, GoalStatus::Active | GoalStatus::Paused)
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalStatus::Active => write!(f, "ACTIVE"),
            GoalStatus::Paused => write!(f, "PAUSED"),
            GoalStatus::Completed => write!(f, "COMPLETED"),
            GoalStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// A capital goal with its plan configuration, as persisted by the external
/// goal collaborator.
///
/// The snapshots (`start_capital_snapshot`, `payout_snapshot`) freeze the
/// account state at creation time so projections stay stable even when the
/// live account changes. "At most one ACTIVE-or-PAUSED goal per account" is
/// enforced by the goal service, never assumed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: Uuid,

    /// Capital the user wants to reach (validated > current capital at creation)
    pub target_capital: f64,

    /// Account capital at goal creation
    pub start_capital_snapshot: f64,

    /// Date the goal was started (daily granularity)
    pub start_date: NaiveDate,

    /// Broker payout ratio at goal creation
    pub payout_snapshot: f64,

    /// Risk per operation as a decimal fraction (e.g., 0.02)
    pub risk_percent: f64,

    /// Planned trading sessions per day
    pub sessions_per_day: u32,

    /// Planned operations per session
    pub ops_per_session: u32,

    /// Estimated win rate used for projections (e.g., 0.60)
    pub winrate_estimate: f64,

    /// Lifecycle status
    pub status: GoalStatus,

    /// Set at creation when the payout snapshot was below 0.80 —
    /// the configuration has little or no statistical edge
    #[serde(default)]
    pub not_recommended: bool,
}

impl Goal {
    /// The goal's plan configuration as growth-model inputs.
    #[must_use]
    pub fn growth_inputs(&self) -> super::growth::GrowthInputs {
        super::growth::GrowthInputs {
            risk_percent: self.risk_percent,
            sessions_per_day: self.sessions_per_day,
            ops_per_session: self.ops_per_session,
            winrate_estimate: self.winrate_estimate,
            payout: self.payout_snapshot,
        }
    }
}
