use serde::{Deserialize, Serialize};

/// Inputs to the daily growth model. Built fresh per calculation request.
///
/// The UI constrains these via radio buttons and sliders (risk 2%/3%,
/// 2–3 sessions, 4–5 ops, win rate 50%–80%), but the core validates them
/// strictly anyway — see `GrowthService`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthInputs {
    /// Risk per operation as a decimal fraction of capital (e.g., 0.02)
    pub risk_percent: f64,

    /// Trading sessions per day (typically 2 or 3)
    pub sessions_per_day: u32,

    /// Operations per session (typically 4 or 5)
    pub ops_per_session: u32,

    /// Estimated win rate as a decimal fraction (e.g., 0.60)
    pub winrate_estimate: f64,

    /// Payout ratio on a winning operation (e.g., 0.85)
    pub payout: f64,
}

impl GrowthInputs {
    /// Total operations per day: sessions × ops per session.
    #[must_use]
    pub fn ops_per_day(&self) -> u32 {
        self.sessions_per_day * self.ops_per_session
    }
}

/// Output of the daily growth model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthResult {
    /// Total operations per day
    pub ops_per_day: u32,

    /// Expected value of one unit of risk per operation, in payout-ratio
    /// terms: winrate × payout − (1 − winrate)
    pub expected_return_per_op: f64,

    /// Multiplicative factor applied to capital once per trading day.
    /// Linear within-day approximation: each operation risks a fixed
    /// fraction of the start-of-day capital, not re-invested intra-day.
    pub daily_growth_factor: f64,
}
