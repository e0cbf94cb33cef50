use crate::errors::CoreError;
use crate::models::growth::{GrowthInputs, GrowthResult};

/// Computes the expected daily capital growth factor from a plan
/// configuration.
///
/// The model is a linear within-day approximation: every operation risks a
/// fixed fraction of the start-of-day capital (no intra-day re-investment),
/// so the daily return is risk × ops × expected return per operation.
pub struct GrowthService;

impl GrowthService {
    pub fn new() -> Self {
        Self
    }

    /// Validate inputs strictly. Out-of-range values are caller errors —
    /// the UI constrains them, so anything invalid here is a programming
    /// mistake upstream, never something to clamp silently.
    pub fn validate(&self, inputs: &GrowthInputs) -> Result<(), CoreError> {
        if inputs.risk_percent <= 0.0 || !inputs.risk_percent.is_finite() {
            return Err(CoreError::InvalidInput(format!(
                "risk_percent must be a positive fraction, got {}",
                inputs.risk_percent
            )));
        }
        if !(0.0..=1.0).contains(&inputs.winrate_estimate) {
            return Err(CoreError::InvalidInput(format!(
                "winrate_estimate must be within [0, 1], got {}",
                inputs.winrate_estimate
            )));
        }
        if inputs.payout <= 0.0 || !inputs.payout.is_finite() {
            return Err(CoreError::InvalidInput(format!(
                "payout must be positive, got {}",
                inputs.payout
            )));
        }
        if inputs.sessions_per_day == 0 {
            return Err(CoreError::InvalidInput(
                "sessions_per_day must be at least 1".to_string(),
            ));
        }
        if inputs.ops_per_session == 0 {
            return Err(CoreError::InvalidInput(
                "ops_per_session must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Compute the daily growth factor for a validated configuration.
    ///
    /// `expected_return_per_op = winrate × payout − (1 − winrate)` is the
    /// expected value of one unit of risk per operation;
    /// `daily_growth_factor = 1 + risk × ops_per_day × expected_return_per_op`.
    /// Deterministic, pure, no I/O.
    pub fn daily_growth_factor(&self, inputs: &GrowthInputs) -> Result<GrowthResult, CoreError> {
        self.validate(inputs)?;

        let ops_per_day = inputs.ops_per_day();
        let expected_return_per_op =
            inputs.winrate_estimate * inputs.payout - (1.0 - inputs.winrate_estimate);
        let daily_growth_factor =
            1.0 + inputs.risk_percent * f64::from(ops_per_day) * expected_return_per_op;

        Ok(GrowthResult {
            ops_per_day,
            expected_return_per_op,
            daily_growth_factor,
        })
    }
}

impl Default for GrowthService {
    fn default() -> Self {
        Self::new()
    }
}
