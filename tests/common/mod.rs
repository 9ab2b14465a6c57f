use trading_plan::models::{Action, Direction, OutputFormat, TradeInput};

/// The worked example: entry 10, target 20, stop 7, budget 100.
pub fn reference_plan() -> TradeInput {
    TradeInput::from_json(
        r#"{
            "symbol": "AAPL",
            "action": "open",
            "direction": "long",
            "entry_price": 10,
            "take_profit_price": 20,
            "stop_loss_price": 7,
            "max_loss_budget": 100,
            "rationale": "Higher low on the daily"
        }"#,
    )
    .unwrap()
}

/// An option overlay plan: strike 232, premium 17, target 260, stop 220.
pub fn option_plan(direction: Direction) -> TradeInput {
    TradeInput {
        symbol: "NVDA".to_string(),
        direction,
        entry_price: 245.0,
        take_profit_price: 260.0,
        stop_loss_price: 220.0,
        option_strike_price: Some(232.0),
        option_premium: Some(17.0),
        ..reference_plan()
    }
}

pub fn with_action(mut input: TradeInput, action: Action) -> TradeInput {
    input.action = action;
    input
}

pub fn with_format(mut input: TradeInput, format: OutputFormat) -> TradeInput {
    input.output_format = format;
    input
}
