use serde::{Deserialize, Serialize};

/// Read-only snapshot of the user's trading account, supplied by the
/// external account collaborator.
///
/// The core never mutates account state — it only reads capital and payout
/// as inputs to plan calculations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSnapshot {
    /// Current capital (always positive, enforced by the account service)
    pub capital: f64,

    /// Broker payout ratio on a winning operation (e.g., 0.85 = 85% profit).
    /// The account service keeps this in [0.80, 0.92]; the core only
    /// requires it to be positive.
    pub payout: f64,

    /// Display currency code (e.g., "USDT", "USD")
    pub currency: String,
}
