pub mod errors;
pub mod models;
pub mod services;
pub mod sources;

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use errors::CoreError;
use models::calendar::{CalendarSummary, MonthCell};
use models::growth::GrowthInputs;
use models::plan::{DailyPlan, DayVisualStatus};
use models::projection::{GoalProgress, GoalProjection};
use services::calendar_service::CalendarService;
use services::projection_service::ProjectionService;
use sources::traits::{AccountSource, GoalSource, PlanSource};

/// Maximum calendar range in days, mirroring the API contract.
const MAX_CALENDAR_RANGE_DAYS: i64 = 365;

/// Main entry point for the goal-planner core.
///
/// Owns no data — account state, goals, and day plans live behind the
/// collaborator sources. The facade fetches what a calculation needs, then
/// delegates to the pure services. It performs no retries, timeouts, or
/// caching; that is the collaborators' responsibility.
#[must_use]
pub struct GoalPlanner {
    account_source: Arc<dyn AccountSource>,
    goal_source: Arc<dyn GoalSource>,
    plan_source: Arc<dyn PlanSource>,
    projection_service: ProjectionService,
    calendar_service: CalendarService,
}

impl std::fmt::Debug for GoalPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoalPlanner")
            .field("account_source", &self.account_source.name())
            .field("goal_source", &self.goal_source.name())
            .field("plan_source", &self.plan_source.name())
            .finish()
    }
}

impl GoalPlanner {
    pub fn new(
        account_source: Arc<dyn AccountSource>,
        goal_source: Arc<dyn GoalSource>,
        plan_source: Arc<dyn PlanSource>,
    ) -> Self {
        Self {
            account_source,
            goal_source,
            plan_source,
            projection_service: ProjectionService::new(),
            calendar_service: CalendarService::new(),
        }
    }

    // ── Plan Calculation ────────────────────────────────────────────

    /// Calculate a daily trading plan and capital projections for the
    /// current account.
    ///
    /// Reads capital and payout from the account collaborator; when an open
    /// goal exists its target feeds the days-to-goal estimate. The payout in
    /// `inputs` is overridden by the account's live payout — the UI never
    /// sends one.
    pub async fn calculate_plan(
        &self,
        inputs: &GrowthInputs,
    ) -> Result<GoalProjection, CoreError> {
        let account = self.account_source.get_account().await?;
        let target_capital = self
            .goal_source
            .get_open_goal()
            .await?
            .map(|g| g.target_capital);

        let mut inputs = inputs.clone();
        inputs.payout = account.payout;

        self.projection_service
            .project_plan(&account, target_capital, &inputs)
    }

    // ── Goal Progress ───────────────────────────────────────────────

    /// Detailed progress for a goal: capital gained, percent complete, days
    /// elapsed, real win rate, and an ETA recomputed from real results.
    pub async fn goal_progress(
        &self,
        goal_id: Uuid,
        as_of: NaiveDate,
    ) -> Result<GoalProgress, CoreError> {
        let goal = self
            .goal_source
            .get_goal(goal_id)
            .await?
            .ok_or_else(|| CoreError::GoalNotFound(goal_id.to_string()))?;
        let account = self.account_source.get_account().await?;
        let actuals = self
            .plan_source
            .get_actuals(goal_id, goal.start_date)
            .await?;

        self.projection_service
            .goal_progress(&goal, account.capital, &actuals, as_of)
    }

    // ── Calendar ────────────────────────────────────────────────────

    /// Fetch a goal's daily plans for a date range and aggregate them.
    pub async fn calendar_summary(
        &self,
        goal_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<CalendarSummary, CoreError> {
        let plans = self.calendar_plans(goal_id, from, to).await?;
        Ok(self.calendar_service.summarize(&plans))
    }

    /// Fetch a goal's daily plans for a date range, ordered by date.
    pub async fn calendar_plans(
        &self,
        goal_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyPlan>, CoreError> {
        if from > to {
            return Err(CoreError::ValidationError(format!(
                "'from' date ({from}) must not be after 'to' date ({to})"
            )));
        }
        let range_days = (to - from).num_days();
        if range_days > MAX_CALENDAR_RANGE_DAYS {
            return Err(CoreError::ValidationError(format!(
                "Calendar range of {range_days} days exceeds maximum of {MAX_CALENDAR_RANGE_DAYS} days"
            )));
        }

        let goal = self
            .goal_source
            .get_goal(goal_id)
            .await?
            .ok_or_else(|| CoreError::GoalNotFound(goal_id.to_string()))?;

        self.plan_source.get_plans(goal.id, from, to).await
    }

    /// Visual status for a single day. Pure; exposed for per-cell rendering.
    #[must_use]
    pub fn classify_day(&self, plan: Option<&DailyPlan>) -> DayVisualStatus {
        self.calendar_service.classify_day(plan)
    }

    /// Fixed 42-cell month grid for aligning plans to visual weeks.
    #[must_use]
    pub fn build_month_grid(&self, month_anchor: NaiveDate) -> Vec<MonthCell> {
        self.calendar_service.build_month_grid(month_anchor)
    }
}
