use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a single calendar day within a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DailyPlanStatus {
    /// No activity recorded yet (future days, or past days never traded)
    Planned,
    /// Some operations recorded but fewer than planned
    InProgress,
    /// All planned operations executed, or the day was closed manually
    Completed,
    /// Trading blocked for the day (loss limit, drawdown, manual block)
    Blocked,
}

impl std::fmt::Display for DailyPlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DailyPlanStatus::Planned => write!(f, "PLANNED"),
            DailyPlanStatus::InProgress => write!(f, "IN_PROGRESS"),
            DailyPlanStatus::Completed => write!(f, "COMPLETED"),
            DailyPlanStatus::Blocked => write!(f, "BLOCKED"),
        }
    }
}

/// One day of a goal's trading calendar: the planned numbers derived from
/// the projected capital, plus whatever actually happened.
///
/// Immutable snapshot supplied by the external plan collaborator (or
/// produced by `CalendarService::project_schedule`). The invariant
/// wins + losses + draws ≤ actual_ops holds for well-formed data but is the
/// collaborator's contract, not validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlan {
    pub id: Uuid,
    pub goal_id: Uuid,
    pub date: NaiveDate,

    // ── Plan (derived from projected capital) ───────────────────────
    pub capital_start_of_day: f64,
    pub planned_sessions: u32,
    pub planned_ops_total: u32,
    pub planned_stake: f64,
    pub expected_win_profit: f64,
    pub expected_loss: f64,

    // ── Actuals ─────────────────────────────────────────────────────
    pub actual_sessions: u32,
    pub actual_ops: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub realized_pnl: f64,

    // ── State ───────────────────────────────────────────────────────
    pub status: DailyPlanStatus,
    #[serde(default)]
    pub blocked_reason: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Per-date roll-up of real operation results, grouped by the caller from
/// individual win/loss/draw operations. Input to schedule projection and
/// goal-progress calculations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayActuals {
    pub date: NaiveDate,
    /// Sessions with at least one operation
    pub sessions: u32,
    pub ops: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub realized_pnl: f64,
}

/// Visual classification of a calendar day, derived from a `DailyPlan`.
///
/// Never stored — recomputed per render. `Display` produces the snake_case
/// tokens the front-end uses as CSS class suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayVisualStatus {
    /// No plan exists for the date
    NoData,
    /// Trading was blocked — takes precedence over any recorded P&L
    Blocked,
    /// A plan exists but no operations were executed
    NoTrade,
    /// Positive realized P&L
    Profit,
    /// Negative realized P&L
    Loss,
    /// Operations executed, P&L exactly zero
    Draw,
}

impl std::fmt::Display for DayVisualStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayVisualStatus::NoData => write!(f, "no_data"),
            DayVisualStatus::Blocked => write!(f, "blocked"),
            DayVisualStatus::NoTrade => write!(f, "no_trade"),
            DayVisualStatus::Profit => write!(f, "profit"),
            DayVisualStatus::Loss => write!(f, "loss"),
            DayVisualStatus::Draw => write!(f, "draw"),
        }
    }
}
