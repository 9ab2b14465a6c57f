use serde::{Deserialize, Serialize};

use crate::models::{Direction, OptionContract, TradeInput};

pub const CONTRACT_MULTIPLIER: f64 = 100.0;
pub const TARGET_RISK_REWARD: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionMetrics {
    /// Already in percent units.
    pub roi: f64,
    pub profit: f64,
    pub loss: f64,
    pub total_cost: f64,
    pub profit_loss_ratio: f64,
}

/// Ratios derived from one `TradeInput`.
///
/// Plain f64 arithmetic throughout: a stop equal to the entry, a zero entry
/// or a zero premium produce Infinity/NaN here, and those values are carried
/// to the rendered plan untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub risk_reward_ratio: f64,
    pub max_position_size: f64,
    /// Fraction, not percent.
    pub underlying_roi: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<OptionMetrics>,
}

impl DerivedMetrics {
    pub fn meets_target_ratio(&self) -> bool {
        self.risk_reward_ratio >= TARGET_RISK_REWARD
    }
}

pub fn calculate(input: &TradeInput) -> DerivedMetrics {
    DerivedMetrics {
        risk_reward_ratio: risk_reward_ratio(
            input.entry_price,
            input.take_profit_price,
            input.stop_loss_price,
        ),
        max_position_size: max_position_size(
            input.max_loss_budget,
            input.entry_price,
            input.stop_loss_price,
        ),
        underlying_roi: underlying_roi(input.entry_price, input.take_profit_price),
        option: input.option_contract().map(|contract| {
            option_metrics(
                contract,
                input.direction,
                input.take_profit_price,
                input.stop_loss_price,
            )
        }),
    }
}

pub fn risk_reward_ratio(entry: f64, take_profit: f64, stop_loss: f64) -> f64 {
    (take_profit - entry) / (entry - stop_loss)
}

/// Units that can be held so a stop-out loses exactly the budget. Not rounded.
pub fn max_position_size(max_loss: f64, entry: f64, stop_loss: f64) -> f64 {
    max_loss / (entry - stop_loss)
}

pub fn underlying_roi(entry: f64, take_profit: f64) -> f64 {
    (take_profit - entry) / entry
}

/// Per-share value of the contract at `price`, net of the premium paid.
fn option_payoff(contract: OptionContract, direction: Direction, price: f64) -> f64 {
    match direction {
        Direction::Long => price - contract.strike - contract.premium,
        Direction::Short => contract.strike - price - contract.premium,
    }
}

pub fn option_metrics(
    contract: OptionContract,
    direction: Direction,
    take_profit: f64,
    stop_loss: f64,
) -> OptionMetrics {
    let at_target = option_payoff(contract, direction, take_profit);
    let at_stop = option_payoff(contract, direction, stop_loss);

    let profit = at_target * CONTRACT_MULTIPLIER;
    let loss = at_stop * CONTRACT_MULTIPLIER;

    OptionMetrics {
        roi: at_target / contract.premium * 100.0,
        profit,
        loss,
        total_cost: contract.premium * CONTRACT_MULTIPLIER,
        profit_loss_ratio: -(profit / loss),
    }
}
