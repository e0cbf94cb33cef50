use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::calendar::{CalendarSummary, MonthCell};
use crate::models::goal::Goal;
use crate::models::plan::{DailyPlan, DailyPlanStatus, DayActuals, DayVisualStatus};
use crate::services::growth_service::GrowthService;

/// Hard cap on schedule projection length (2 years of daily plans).
const MAX_GENERATED_DAYS: usize = 730;

/// Cells in the month grid: 6 weeks × 7 days, enough for any month at any
/// weekday offset.
const MONTH_GRID_CELLS: usize = 42;

/// Classifies calendar days, aggregates range statistics, and lays out the
/// month grid.
///
/// The core computes all the numbers — the frontend only renders.
pub struct CalendarService {
    growth_service: GrowthService,
}

impl CalendarService {
    pub fn new() -> Self {
        Self {
            growth_service: GrowthService::new(),
        }
    }

    /// Visual status for a single day.
    ///
    /// Precedence matters: a blocked day stays `Blocked` even when partial
    /// activity before the block left nonzero P&L on it.
    #[must_use]
    pub fn classify_day(&self, plan: Option<&DailyPlan>) -> DayVisualStatus {
        let Some(plan) = plan else {
            return DayVisualStatus::NoData;
        };
        if plan.status == DailyPlanStatus::Blocked {
            return DayVisualStatus::Blocked;
        }
        if plan.actual_ops == 0 {
            return DayVisualStatus::NoTrade;
        }
        if plan.realized_pnl > 0.0 {
            DayVisualStatus::Profit
        } else if plan.realized_pnl < 0.0 {
            DayVisualStatus::Loss
        } else {
            DayVisualStatus::Draw
        }
    }

    /// Aggregate statistics over an ordered range of daily plans.
    ///
    /// The win rate counts only decided operations (wins + losses) from days
    /// that were actually traded; with no decided operation it is `None`,
    /// never a silent 0%.
    #[must_use]
    pub fn summarize(&self, plans: &[DailyPlan]) -> CalendarSummary {
        let total_days = plans.len();
        let completed_days = plans
            .iter()
            .filter(|p| p.status == DailyPlanStatus::Completed)
            .count();
        let blocked_days = plans
            .iter()
            .filter(|p| p.status == DailyPlanStatus::Blocked)
            .count();
        let total_pnl: f64 = plans.iter().map(|p| p.realized_pnl).sum();

        let mut total_wins = 0u32;
        let mut total_losses = 0u32;
        let mut total_draws = 0u32;
        for plan in plans {
            total_wins += plan.wins;
            total_losses += plan.losses;
            total_draws += plan.draws;
        }

        let decided = plans
            .iter()
            .filter(|p| p.actual_ops > 0)
            .map(|p| p.wins + p.losses)
            .sum::<u32>();
        let decided_wins = plans
            .iter()
            .filter(|p| p.actual_ops > 0)
            .map(|p| p.wins)
            .sum::<u32>();
        let real_winrate = if decided > 0 {
            Some(f64::from(decided_wins) / f64::from(decided))
        } else {
            None
        };

        CalendarSummary {
            total_days,
            completed_days,
            blocked_days,
            total_pnl,
            total_wins,
            total_losses,
            total_draws,
            real_winrate,
        }
    }

    /// Fixed 42-cell (6×7) month grid starting on the Monday on or before
    /// the 1st of the anchor month.
    ///
    /// Pure calendar geometry: out-of-month cells carry real dates from the
    /// adjacent months so the grid aligns daily plans to visual weeks.
    #[must_use]
    pub fn build_month_grid(&self, month_anchor: NaiveDate) -> Vec<MonthCell> {
        let first_of_month = month_anchor.with_day(1).unwrap_or(month_anchor);
        let monday_offset = first_of_month.weekday().num_days_from_monday();
        let grid_start = first_of_month - Days::new(u64::from(monday_offset));

        let mut cells = Vec::with_capacity(MONTH_GRID_CELLS);
        for i in 0..MONTH_GRID_CELLS {
            let date = grid_start + Days::new(i as u64);
            let in_current_month =
                date.month() == first_of_month.month() && date.year() == first_of_month.year();
            cells.push(MonthCell {
                date,
                in_current_month,
                day_number: in_current_month.then(|| date.day()),
            });
        }
        cells
    }

    /// Project a goal's day-by-day calendar from its start date.
    ///
    /// Days with recorded actuals use real results (and real P&L drives the
    /// running capital); past days without actuals stay `Planned` and
    /// contribute nothing; today and future days contribute the expected
    /// daily P&L. Generation stops once the projected capital reaches the
    /// target or falls to zero on or after `today`, capped at two years.
    ///
    /// Goals that are `Completed` or `Cancelled` produce an empty schedule.
    pub fn project_schedule(
        &self,
        goal: &Goal,
        today: NaiveDate,
        actuals: &[DayActuals],
    ) -> Result<Vec<DailyPlan>, CoreError> {
        if !goal.status.is_open() {
            return Ok(Vec::new());
        }

        let inputs = goal.growth_inputs();
        let growth = self.growth_service.daily_growth_factor(&inputs)?;
        let ops_total = growth.ops_per_day;

        let actuals_by_date: HashMap<NaiveDate, &DayActuals> =
            actuals.iter().map(|a| (a.date, a)).collect();

        let mut plans = Vec::new();
        let mut projected_capital = goal.start_capital_snapshot;
        let mut current_date = goal.start_date;

        for _ in 0..MAX_GENERATED_DAYS {
            let capital_start = round_cents(projected_capital);
            let planned_stake = round_cents(capital_start.max(0.0) * goal.risk_percent);
            let expected_win_profit = round_cents(planned_stake * goal.payout_snapshot);
            let expected_loss = planned_stake;
            let expected_daily_pnl = round_cents(
                planned_stake * f64::from(ops_total) * growth.expected_return_per_op,
            );

            let mut plan = DailyPlan {
                id: Uuid::new_v4(),
                goal_id: goal.id,
                date: current_date,
                capital_start_of_day: capital_start,
                planned_sessions: goal.sessions_per_day,
                planned_ops_total: ops_total,
                planned_stake,
                expected_win_profit,
                expected_loss,
                actual_sessions: 0,
                actual_ops: 0,
                wins: 0,
                losses: 0,
                draws: 0,
                realized_pnl: 0.0,
                status: DailyPlanStatus::Planned,
                blocked_reason: None,
                notes: None,
            };

            let pnl_for_projection = if let Some(day) = actuals_by_date.get(&current_date) {
                plan.actual_sessions = day.sessions;
                plan.actual_ops = day.ops;
                plan.wins = day.wins;
                plan.losses = day.losses;
                plan.draws = day.draws;
                plan.realized_pnl = round_cents(day.realized_pnl);
                plan.status = if day.ops >= ops_total && ops_total > 0 {
                    DailyPlanStatus::Completed
                } else {
                    DailyPlanStatus::InProgress
                };
                plan.realized_pnl
            } else if current_date < today {
                // Never traded and the day is gone: contributes nothing.
                0.0
            } else {
                expected_daily_pnl
            };

            projected_capital = round_cents(capital_start + pnl_for_projection);
            plans.push(plan);

            if current_date >= today
                && (projected_capital >= goal.target_capital || projected_capital <= 0.0)
            {
                break;
            }

            current_date = match current_date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        Ok(plans)
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}

/// Round a monetary value to cents.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
