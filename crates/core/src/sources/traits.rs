use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::account::AccountSnapshot;
use crate::models::goal::Goal;
use crate::models::plan::{DailyPlan, DayActuals};

/// Trait abstraction for the external account collaborator.
///
/// The application layer plugs in a REST-backed (or in-memory) implementation;
/// the core only ever reads from it. If the backing API changes, only that one
/// implementation changes — the rest of the codebase is untouched.
#[async_trait]
pub trait AccountSource: Send + Sync {
    /// Human-readable name of this source (for errors).
    fn name(&self) -> &str;

    /// Current account snapshot: capital, payout, currency.
    async fn get_account(&self) -> Result<AccountSnapshot, CoreError>;
}

/// Trait abstraction for the external goal collaborator.
///
/// Goal lifecycle (creation, status transitions, the one-open-goal-per-account
/// rule) lives entirely behind this seam; the core reads goals, never writes.
#[async_trait]
pub trait GoalSource: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch a goal by id. `Ok(None)` when no such goal exists.
    async fn get_goal(&self, goal_id: Uuid) -> Result<Option<Goal>, CoreError>;

    /// The account's currently open (active or paused) goal, if any.
    async fn get_open_goal(&self) -> Result<Option<Goal>, CoreError>;
}

/// Trait abstraction for the external day-plan collaborator.
#[async_trait]
pub trait PlanSource: Send + Sync {
    fn name(&self) -> &str;

    /// Daily plans for a goal within a date range (inclusive), ordered by date.
    async fn get_plans(
        &self,
        goal_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyPlan>, CoreError>;

    /// Real operation results rolled up per date, from `since` onward.
    async fn get_actuals(
        &self,
        goal_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<DayActuals>, CoreError>;
}
