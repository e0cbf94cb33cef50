use serde::{Deserialize, Serialize};

/// Risk alerts attached to a plan calculation.
///
/// The core emits typed warnings; the presentation layer localizes them.
/// The `Display` text is the English fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanWarning {
    /// Payout below 0.80 — the configuration has little or no edge
    LowPayout,
    /// Daily growth factor ≤ 1 — capital is not expected to grow
    NoExpectedGrowth,
    /// A target is set but unreachable under the current expectation model
    GoalUnreachable,
    /// Estimated win rate below 0.55 — thin margin over break-even
    LowWinrate,
}

impl std::fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanWarning::LowPayout => write!(
                f,
                "Payout is below 80% — expected edge is reduced or negative"
            ),
            PlanWarning::NoExpectedGrowth => {
                write!(f, "Capital is not expected to grow with this configuration")
            }
            PlanWarning::GoalUnreachable => {
                write!(f, "The goal is not reachable under the current plan")
            }
            PlanWarning::LowWinrate => {
                write!(f, "Estimated win rate is below 55%")
            }
        }
    }
}

/// Full result of a plan calculation: configuration echo, per-operation
/// numbers, growth factor, projections, and alerts.
///
/// Derived on demand, never persisted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProjection {
    // ── Plan configuration ──────────────────────────────────────────
    pub sessions_per_day: u32,
    pub ops_per_session: u32,
    pub ops_per_day: u32,
    pub risk_percent: f64,
    pub winrate: f64,

    // ── Account context ─────────────────────────────────────────────
    pub current_capital: f64,
    pub payout: f64,
    pub target_capital: Option<f64>,

    // ── Per-operation amounts ───────────────────────────────────────
    /// Capital risked on a single operation: capital × risk fraction
    pub stake_per_operation: f64,
    /// Profit on a winning operation: stake × payout
    pub win_profit: f64,
    /// Loss on a losing operation: the full stake (draws are neutral)
    pub loss_amount: f64,
    pub expected_return_per_op: f64,

    // ── Growth & projections ────────────────────────────────────────
    pub daily_growth_factor: f64,
    /// Expected capital after 15 trading days of uniform daily compounding
    pub projection_15_days: f64,
    /// Expected capital after 30 trading days
    pub projection_30_days: f64,
    /// Estimated trading days to reach the target. `None` when no target is
    /// set, the target is already met, or the growth factor is ≤ 1 —
    /// never 0 or negative.
    pub days_to_goal: Option<u32>,

    // ── Alerts ──────────────────────────────────────────────────────
    /// Set when the payout makes the configuration not recommended
    pub blocked_recommended: bool,
    /// Ordered warnings (low payout first, matching display order)
    pub warnings: Vec<PlanWarning>,
}

/// Progress metrics for an existing goal, combining the live account capital
/// with real trading results since the goal started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    pub current_capital: f64,

    /// Capital gained (or lost, negative) since the goal start snapshot
    pub capital_gained: f64,

    /// current_capital / target_capital × 100
    pub progress_percent: f64,

    /// Calendar days since the goal start date
    pub days_elapsed: i64,

    /// Win rate over all real operations since the goal start
    /// (wins / total ops, draws included). `None` when no operations exist.
    pub real_winrate: Option<f64>,

    /// ETA recomputed with the real win rate when available, otherwise the
    /// goal's estimate. `None` when the goal is unreachable or already met.
    pub estimated_days_to_goal: Option<u32>,

    /// Growth factor used for the ETA
    pub daily_growth_factor: f64,
}
