use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::account::AccountSnapshot;
use crate::models::goal::Goal;
use crate::models::growth::GrowthInputs;
use crate::models::plan::DayActuals;
use crate::models::projection::{GoalProgress, GoalProjection, PlanWarning};
use crate::services::growth_service::GrowthService;

/// Payout below this threshold means the configuration has little or no
/// statistical edge and trading is not recommended.
const LOW_PAYOUT_THRESHOLD: f64 = 0.80;

/// Win rates below this leave a thin margin over break-even.
const LOW_WINRATE_THRESHOLD: f64 = 0.55;

/// Derives plan projections and goal progress from the growth model.
///
/// All projections are deterministic expectations — uniform daily
/// compounding that ignores weekends, blocked days, variance, and
/// consecutive-loss streaks. Not a simulation.
pub struct ProjectionService {
    growth_service: GrowthService,
}

impl ProjectionService {
    pub fn new() -> Self {
        Self {
            growth_service: GrowthService::new(),
        }
    }

    /// Calculate a full daily trading plan and capital projections.
    ///
    /// `target_capital` comes from the account's goal when one exists;
    /// without it the projection still computes stake, growth factor, and
    /// 15/30-day expectations, just no days-to-goal estimate.
    pub fn project_plan(
        &self,
        account: &AccountSnapshot,
        target_capital: Option<f64>,
        inputs: &GrowthInputs,
    ) -> Result<GoalProjection, CoreError> {
        let growth = self.growth_service.daily_growth_factor(inputs)?;
        let factor = growth.daily_growth_factor;

        let capital = account.capital;
        let stake_per_operation = capital * inputs.risk_percent;
        let win_profit = stake_per_operation * inputs.payout;
        let loss_amount = stake_per_operation;

        // Modeled capital cannot go negative: a factor at or below zero
        // means the account is wiped out within a day.
        let (projection_15_days, projection_30_days) = if factor > 0.0 {
            (capital * factor.powi(15), capital * factor.powi(30))
        } else {
            (0.0, 0.0)
        };

        let days_to_goal = target_capital.and_then(|target| days_to_reach(capital, target, factor));

        let mut warnings = Vec::new();
        let mut blocked_recommended = false;

        if inputs.payout < LOW_PAYOUT_THRESHOLD {
            warnings.push(PlanWarning::LowPayout);
            blocked_recommended = true;
        }
        if factor <= 1.0 {
            warnings.push(PlanWarning::NoExpectedGrowth);
            if target_capital.is_some() {
                warnings.push(PlanWarning::GoalUnreachable);
            }
        }
        if inputs.winrate_estimate < LOW_WINRATE_THRESHOLD {
            warnings.push(PlanWarning::LowWinrate);
        }

        Ok(GoalProjection {
            sessions_per_day: inputs.sessions_per_day,
            ops_per_session: inputs.ops_per_session,
            ops_per_day: growth.ops_per_day,
            risk_percent: inputs.risk_percent,
            winrate: inputs.winrate_estimate,
            current_capital: capital,
            payout: inputs.payout,
            target_capital,
            stake_per_operation,
            win_profit,
            loss_amount,
            expected_return_per_op: growth.expected_return_per_op,
            daily_growth_factor: factor,
            projection_15_days,
            projection_30_days,
            days_to_goal,
            blocked_recommended,
            warnings,
        })
    }

    /// Detailed progress for an existing goal.
    ///
    /// The ETA prefers the real win rate observed since the goal start over
    /// the configured estimate; with no recorded operations it falls back to
    /// the estimate. Draws count toward the real win rate's denominator here
    /// (every executed operation matters for the pace estimate), unlike the
    /// calendar summary's decided-only win rate.
    pub fn goal_progress(
        &self,
        goal: &Goal,
        current_capital: f64,
        actuals: &[DayActuals],
        as_of: NaiveDate,
    ) -> Result<GoalProgress, CoreError> {
        if goal.target_capital <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "goal target_capital must be positive, got {}",
                goal.target_capital
            )));
        }

        let capital_gained = current_capital - goal.start_capital_snapshot;
        let progress_percent = (current_capital / goal.target_capital) * 100.0;
        let days_elapsed = (as_of - goal.start_date).num_days();

        let total_wins: u32 = actuals.iter().map(|a| a.wins).sum();
        let total_ops: u32 = actuals.iter().map(|a| a.ops).sum();
        let real_winrate = if total_ops > 0 {
            Some(f64::from(total_wins) / f64::from(total_ops))
        } else {
            None
        };

        let mut inputs = goal.growth_inputs();
        if let Some(rate) = real_winrate {
            inputs.winrate_estimate = rate;
        }
        let growth = self.growth_service.daily_growth_factor(&inputs)?;

        let estimated_days_to_goal = days_to_reach(
            current_capital,
            goal.target_capital,
            growth.daily_growth_factor,
        );

        Ok(GoalProgress {
            current_capital,
            capital_gained,
            progress_percent,
            days_elapsed,
            real_winrate,
            estimated_days_to_goal,
            daily_growth_factor: growth.daily_growth_factor,
        })
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}

/// Days of uniform daily compounding needed to grow `capital` to `target`:
/// ceil(ln(target / capital) / ln(factor)).
///
/// `None` when the factor is ≤ 1 (no growth) or the target is already met —
/// valid steady-state outcomes, not errors. Never returns 0 or negative.
fn days_to_reach(capital: f64, target: f64, factor: f64) -> Option<u32> {
    if factor <= 1.0 || capital <= 0.0 || target <= capital {
        return None;
    }
    let days = (target / capital).ln() / factor.ln();
    if !days.is_finite() {
        return None;
    }
    Some(days.ceil().max(1.0) as u32)
}
