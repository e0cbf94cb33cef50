use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use trade_discipline_core::errors::CoreError;
use trade_discipline_core::models::account::AccountSnapshot;
use trade_discipline_core::models::goal::{Goal, GoalStatus};
use trade_discipline_core::models::growth::GrowthInputs;
use trade_discipline_core::models::plan::{
    DailyPlan, DailyPlanStatus, DayActuals, DayVisualStatus,
};
use trade_discipline_core::sources::traits::{AccountSource, GoalSource, PlanSource};
use trade_discipline_core::GoalPlanner;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Mock Collaborators (for testing without a real backend)
// ═══════════════════════════════════════════════════════════════════

struct MockAccountSource {
    snapshot: Option<AccountSnapshot>,
}

#[async_trait]
impl AccountSource for MockAccountSource {
    fn name(&self) -> &str {
        "mock-account"
    }

    async fn get_account(&self) -> Result<AccountSnapshot, CoreError> {
        self.snapshot.clone().ok_or(CoreError::AccountUnavailable)
    }
}

struct MockGoalSource {
    goals: HashMap<Uuid, Goal>,
}

impl MockGoalSource {
    fn with_goals(goals: Vec<Goal>) -> Self {
        Self {
            goals: goals.into_iter().map(|g| (g.id, g)).collect(),
        }
    }
}

#[async_trait]
impl GoalSource for MockGoalSource {
    fn name(&self) -> &str {
        "mock-goals"
    }

    async fn get_goal(&self, goal_id: Uuid) -> Result<Option<Goal>, CoreError> {
        Ok(self.goals.get(&goal_id).cloned())
    }

    async fn get_open_goal(&self) -> Result<Option<Goal>, CoreError> {
        Ok(self.goals.values().find(|g| g.status.is_open()).cloned())
    }
}

struct MockPlanSource {
    plans: Vec<DailyPlan>,
    actuals: Vec<DayActuals>,
}

#[async_trait]
impl PlanSource for MockPlanSource {
    fn name(&self) -> &str {
        "mock-plans"
    }

    async fn get_plans(
        &self,
        goal_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyPlan>, CoreError> {
        Ok(self
            .plans
            .iter()
            .filter(|p| p.goal_id == goal_id && p.date >= from && p.date <= to)
            .cloned()
            .collect())
    }

    async fn get_actuals(
        &self,
        _goal_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<DayActuals>, CoreError> {
        Ok(self
            .actuals
            .iter()
            .filter(|a| a.date >= since)
            .cloned()
            .collect())
    }
}

// ═══════════════════════════════════════════════════════════════════
// Test Fixtures
// ═══════════════════════════════════════════════════════════════════

fn sample_goal() -> Goal {
    Goal {
        id: Uuid::new_v4(),
        target_capital: 2000.0,
        start_capital_snapshot: 1000.0,
        start_date: d(2025, 3, 1),
        payout_snapshot: 0.85,
        risk_percent: 0.02,
        sessions_per_day: 2,
        ops_per_session: 5,
        winrate_estimate: 0.60,
        status: GoalStatus::Active,
        not_recommended: false,
    }
}

fn reference_inputs() -> GrowthInputs {
    GrowthInputs {
        risk_percent: 0.02,
        sessions_per_day: 2,
        ops_per_session: 5,
        winrate_estimate: 0.60,
        payout: 0.85,
    }
}

fn day_plan(goal_id: Uuid, date: NaiveDate, status: DailyPlanStatus, pnl: f64) -> DailyPlan {
    let traded = status != DailyPlanStatus::Planned;
    DailyPlan {
        id: Uuid::new_v4(),
        goal_id,
        date,
        capital_start_of_day: 1000.0,
        planned_sessions: 2,
        planned_ops_total: 10,
        planned_stake: 20.0,
        expected_win_profit: 17.0,
        expected_loss: 20.0,
        actual_sessions: if traded { 2 } else { 0 },
        actual_ops: if traded { 10 } else { 0 },
        wins: if traded { 6 } else { 0 },
        losses: if traded { 4 } else { 0 },
        draws: 0,
        realized_pnl: pnl,
        status,
        blocked_reason: None,
        notes: None,
    }
}

fn planner(
    snapshot: Option<AccountSnapshot>,
    goals: Vec<Goal>,
    plans: Vec<DailyPlan>,
    actuals: Vec<DayActuals>,
) -> GoalPlanner {
    GoalPlanner::new(
        Arc::new(MockAccountSource { snapshot }),
        Arc::new(MockGoalSource::with_goals(goals)),
        Arc::new(MockPlanSource { plans, actuals }),
    )
}

fn usdt_account(capital: f64, payout: f64) -> AccountSnapshot {
    AccountSnapshot {
        capital,
        payout,
        currency: "USDT".to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════
// Plan Calculation
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn calculate_plan_reads_capital_and_target_from_collaborators() {
    let goal = sample_goal();
    let planner = planner(Some(usdt_account(1000.0, 0.85)), vec![goal], vec![], vec![]);

    let projection = planner.calculate_plan(&reference_inputs()).await.unwrap();
    assert_eq!(projection.current_capital, 1000.0);
    assert_eq!(projection.target_capital, Some(2000.0));
    assert_eq!(projection.days_to_goal, Some(32));
    assert!((projection.stake_per_operation - 20.0).abs() < 1e-9);
}

#[tokio::test]
async fn calculate_plan_overrides_payout_with_account_value() {
    // The UI never sends a payout; whatever arrives is replaced by the
    // account's live value.
    let planner = planner(Some(usdt_account(1000.0, 0.90)), vec![], vec![], vec![]);
    let inputs = GrowthInputs {
        payout: 0.10,
        ..reference_inputs()
    };

    let projection = planner.calculate_plan(&inputs).await.unwrap();
    assert_eq!(projection.payout, 0.90);
    assert!((projection.win_profit - 18.0).abs() < 1e-9);
}

#[tokio::test]
async fn calculate_plan_without_open_goal_has_no_eta() {
    let closed = Goal {
        status: GoalStatus::Completed,
        ..sample_goal()
    };
    let planner = planner(Some(usdt_account(1000.0, 0.85)), vec![closed], vec![], vec![]);

    let projection = planner.calculate_plan(&reference_inputs()).await.unwrap();
    assert_eq!(projection.target_capital, None);
    assert_eq!(projection.days_to_goal, None);
}

#[tokio::test]
async fn calculate_plan_propagates_account_failure() {
    let planner = planner(None, vec![], vec![], vec![]);
    let err = planner.calculate_plan(&reference_inputs()).await.unwrap_err();
    assert!(matches!(err, CoreError::AccountUnavailable));
}

#[tokio::test]
async fn calculate_plan_rejects_invalid_inputs() {
    let planner = planner(Some(usdt_account(1000.0, 0.85)), vec![], vec![], vec![]);
    let inputs = GrowthInputs {
        risk_percent: -0.02,
        ..reference_inputs()
    };
    let err = planner.calculate_plan(&inputs).await.unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));
}

// ═══════════════════════════════════════════════════════════════════
// Goal Progress
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn goal_progress_combines_account_and_actuals() {
    let goal = sample_goal();
    let goal_id = goal.id;
    let actuals = vec![DayActuals {
        date: d(2025, 3, 3),
        sessions: 2,
        ops: 10,
        wins: 6,
        losses: 4,
        draws: 0,
        realized_pnl: 42.0,
    }];
    let planner = planner(Some(usdt_account(1100.0, 0.85)), vec![goal], vec![], actuals);

    let progress = planner.goal_progress(goal_id, d(2025, 3, 11)).await.unwrap();
    assert!((progress.capital_gained - 100.0).abs() < 1e-9);
    assert!((progress.progress_percent - 55.0).abs() < 1e-9);
    assert_eq!(progress.days_elapsed, 10);
    assert!((progress.real_winrate.unwrap() - 0.6).abs() < 1e-9);
}

#[tokio::test]
async fn goal_progress_unknown_goal_fails() {
    let planner = planner(Some(usdt_account(1000.0, 0.85)), vec![], vec![], vec![]);
    let err = planner
        .goal_progress(Uuid::new_v4(), d(2025, 3, 11))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::GoalNotFound(_)));
}

// ═══════════════════════════════════════════════════════════════════
// Calendar
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn calendar_summary_aggregates_plans_in_range() {
    let goal = sample_goal();
    let goal_id = goal.id;
    let plans = vec![
        day_plan(goal_id, d(2025, 3, 3), DailyPlanStatus::Completed, 42.0),
        day_plan(goal_id, d(2025, 3, 4), DailyPlanStatus::Blocked, -60.0),
        day_plan(goal_id, d(2025, 3, 5), DailyPlanStatus::Planned, 0.0),
        // Outside the requested range — must not be counted.
        day_plan(goal_id, d(2025, 4, 1), DailyPlanStatus::Completed, 99.0),
    ];
    let planner = planner(Some(usdt_account(1000.0, 0.85)), vec![goal], plans, vec![]);

    let summary = planner
        .calendar_summary(goal_id, d(2025, 3, 1), d(2025, 3, 31))
        .await
        .unwrap();
    assert_eq!(summary.total_days, 3);
    assert_eq!(summary.completed_days, 1);
    assert_eq!(summary.blocked_days, 1);
    assert!((summary.total_pnl - -18.0).abs() < 1e-9);
}

#[tokio::test]
async fn calendar_rejects_inverted_range() {
    let goal = sample_goal();
    let goal_id = goal.id;
    let planner = planner(Some(usdt_account(1000.0, 0.85)), vec![goal], vec![], vec![]);

    let err = planner
        .calendar_summary(goal_id, d(2025, 3, 31), d(2025, 3, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::ValidationError(_)));
}

#[tokio::test]
async fn calendar_rejects_ranges_over_a_year() {
    let goal = sample_goal();
    let goal_id = goal.id;
    let planner = planner(Some(usdt_account(1000.0, 0.85)), vec![goal], vec![], vec![]);

    let err = planner
        .calendar_summary(goal_id, d(2025, 1, 1), d(2026, 6, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::ValidationError(_)));
}

#[tokio::test]
async fn calendar_unknown_goal_fails() {
    let planner = planner(Some(usdt_account(1000.0, 0.85)), vec![], vec![], vec![]);
    let err = planner
        .calendar_summary(Uuid::new_v4(), d(2025, 3, 1), d(2025, 3, 31))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::GoalNotFound(_)));
}

// ═══════════════════════════════════════════════════════════════════
// Synchronous passthroughs
// ═══════════════════════════════════════════════════════════════════

#[test]
fn classify_day_is_exposed_on_the_facade() {
    let planner = planner(None, vec![], vec![], vec![]);
    assert_eq!(planner.classify_day(None), DayVisualStatus::NoData);

    let blocked = day_plan(Uuid::new_v4(), d(2025, 3, 4), DailyPlanStatus::Blocked, 50.0);
    assert_eq!(planner.classify_day(Some(&blocked)), DayVisualStatus::Blocked);
}

#[test]
fn month_grid_is_exposed_on_the_facade() {
    let planner = planner(None, vec![], vec![], vec![]);
    let grid = planner.build_month_grid(d(2025, 9, 1));
    assert_eq!(grid.len(), 42);
    assert_eq!(grid.iter().filter(|c| c.in_current_month).count(), 30);
}
