use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over a range of daily plans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarSummary {
    pub total_days: usize,
    pub completed_days: usize,
    pub blocked_days: usize,

    /// Sum of realized P&L over the range
    pub total_pnl: f64,

    pub total_wins: u32,
    pub total_losses: u32,
    pub total_draws: u32,

    /// Σwins / Σ(wins + losses) over days with executed operations —
    /// draws are excluded from the denominator. `None` when no decided
    /// operation exists, so an empty range never reads as 0%.
    pub real_winrate: Option<f64>,
}

/// One cell of the 6×7 month grid.
///
/// Out-of-month cells carry real dates from the adjacent months so the grid
/// is continuous, but are flagged so the front-end can dim them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthCell {
    pub date: NaiveDate,

    /// Whether this cell falls inside the anchor month
    pub in_current_month: bool,

    /// Day-of-month number for in-month cells, `None` otherwise
    pub day_number: Option<u32>,
}
