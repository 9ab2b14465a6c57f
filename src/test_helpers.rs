use crate::models::{Direction, TradeInput};

/// The blank form with a symbol filled in: entry 10, target 20, stop 7, budget 100.
pub fn default_input() -> TradeInput {
    TradeInput {
        symbol: "AAPL".to_string(),
        ..TradeInput::default()
    }
}

/// An opening plan with a 232 strike, 17 premium option overlay.
///
/// Entry sits between target and stop for the given direction.
pub fn option_input(direction: Direction, take_profit: f64, stop_loss: f64) -> TradeInput {
    let entry_price = match direction {
        Direction::Long => 248.0,
        Direction::Short => 220.0,
    };
    TradeInput {
        direction,
        entry_price,
        take_profit_price: take_profit,
        stop_loss_price: stop_loss,
        option_strike_price: Some(232.0),
        option_premium: Some(17.0),
        ..default_input()
    }
}

/// Config with no environment involved.
pub fn default_test_config() -> crate::config::Config {
    crate::config::Config::default()
}
