pub mod direction;
pub mod trade_input;

pub use direction::*;
pub use trade_input::{FieldEdit, OptionContract, TradeInput};
