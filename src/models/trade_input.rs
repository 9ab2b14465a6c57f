use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::{Action, Direction, OutputFormat, Slope, Trend};

/// Strike and premium of the option overlay, both present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionContract {
    pub strike: f64,
    pub premium: f64,
}

/// The whole form. Missing keys in a JSON file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeInput {
    pub symbol: String,
    pub action: Action,
    pub direction: Direction,
    pub weekly_trend: Trend,
    pub daily_trend: Trend,
    pub slope: Slope,

    pub rationale: String,
    pub take_profit_rationale: String,
    pub stop_loss_rationale: String,

    pub entry_price: f64,
    pub take_profit_price: f64,
    pub stop_loss_price: f64,
    pub max_loss_budget: f64,

    pub realized_result: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_strike_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_premium: Option<f64>,

    pub output_format: OutputFormat,
}

impl Default for TradeInput {
    fn default() -> Self {
        Self {
            symbol: String::new(),
            action: Action::Open,
            direction: Direction::Long,
            weekly_trend: Trend::Bullish,
            daily_trend: Trend::Bullish,
            slope: Slope::One,
            rationale: String::new(),
            take_profit_rationale: String::new(),
            stop_loss_rationale: String::new(),
            entry_price: 10.0,
            take_profit_price: 20.0,
            stop_loss_price: 7.0,
            max_loss_budget: 100.0,
            realized_result: String::new(),
            option_strike_price: None,
            option_premium: None,
            output_format: OutputFormat::LinkedNotes,
        }
    }
}

impl TradeInput {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse `json`, taking every key it leaves out from `base`.
    pub fn from_json_over(json: &str, base: &TradeInput) -> Result<Self> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        match overrides {
            serde_json::Value::Object(given) => {
                let mut merged = serde_json::to_value(base)?;
                if let Some(fields) = merged.as_object_mut() {
                    fields.extend(given);
                }
                Ok(serde_json::from_value(merged)?)
            }
            other => Ok(serde_json::from_value(other)?),
        }
    }

    pub fn load(path: &std::path::Path) -> Result<Self> {
        Self::load_over(path, &TradeInput::default())
    }

    pub fn load_over(path: &std::path::Path, base: &TradeInput) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_over(&raw, base)
    }

    /// The option overlay is active only when both strike and premium are set.
    pub fn option_contract(&self) -> Option<OptionContract> {
        match (self.option_strike_price, self.option_premium) {
            (Some(strike), Some(premium)) => Some(OptionContract { strike, premium }),
            _ => None,
        }
    }

    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Symbol(v) => self.symbol = v.to_uppercase(),
            FieldEdit::Action(v) => self.action = v,
            FieldEdit::Direction(v) => self.direction = v,
            FieldEdit::WeeklyTrend(v) => self.weekly_trend = v,
            FieldEdit::DailyTrend(v) => self.daily_trend = v,
            FieldEdit::Slope(v) => self.slope = v,
            FieldEdit::Rationale(v) => self.rationale = v,
            FieldEdit::TakeProfitRationale(v) => self.take_profit_rationale = v,
            FieldEdit::StopLossRationale(v) => self.stop_loss_rationale = v,
            FieldEdit::EntryPrice(v) => self.entry_price = v,
            FieldEdit::TakeProfitPrice(v) => self.take_profit_price = v,
            FieldEdit::StopLossPrice(v) => self.stop_loss_price = v,
            FieldEdit::MaxLossBudget(v) => self.max_loss_budget = v,
            FieldEdit::RealizedResult(v) => self.realized_result = v,
            FieldEdit::OptionStrikePrice(v) => self.option_strike_price = v,
            FieldEdit::OptionPremium(v) => self.option_premium = v,
            FieldEdit::OutputFormat(v) => self.output_format = v,
        }
    }
}

/// One change to one form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Symbol(String),
    Action(Action),
    Direction(Direction),
    WeeklyTrend(Trend),
    DailyTrend(Trend),
    Slope(Slope),
    Rationale(String),
    TakeProfitRationale(String),
    StopLossRationale(String),
    EntryPrice(f64),
    TakeProfitPrice(f64),
    StopLossPrice(f64),
    MaxLossBudget(f64),
    RealizedResult(String),
    OptionStrikePrice(Option<f64>),
    OptionPremium(Option<f64>),
    OutputFormat(OutputFormat),
}

impl FieldEdit {
    pub const FIELDS: [&'static str; 17] = [
        "symbol",
        "action",
        "direction",
        "weekly_trend",
        "daily_trend",
        "slope",
        "rationale",
        "take_profit_rationale",
        "stop_loss_rationale",
        "entry_price",
        "take_profit_price",
        "stop_loss_price",
        "max_loss_budget",
        "realized_result",
        "option_strike_price",
        "option_premium",
        "output_format",
    ];

    /// Build an edit from a field name and the raw text typed into it.
    ///
    /// Blank numbers coerce to zero; blank option fields clear the overlay.
    pub fn parse(field: &str, value: &str) -> Result<FieldEdit> {
        let field = field.trim();
        let edit = match field {
            "symbol" => FieldEdit::Symbol(value.trim().to_string()),
            "action" => FieldEdit::Action(value.parse()?),
            "direction" => FieldEdit::Direction(value.parse()?),
            "weekly_trend" => FieldEdit::WeeklyTrend(value.parse()?),
            "daily_trend" => FieldEdit::DailyTrend(value.parse()?),
            "slope" => FieldEdit::Slope(value.parse()?),
            "rationale" => FieldEdit::Rationale(value.to_string()),
            "take_profit_rationale" => FieldEdit::TakeProfitRationale(value.to_string()),
            "stop_loss_rationale" => FieldEdit::StopLossRationale(value.to_string()),
            "entry_price" => FieldEdit::EntryPrice(coerce_number(field, value)?),
            "take_profit_price" => FieldEdit::TakeProfitPrice(coerce_number(field, value)?),
            "stop_loss_price" => FieldEdit::StopLossPrice(coerce_number(field, value)?),
            "max_loss_budget" => FieldEdit::MaxLossBudget(coerce_number(field, value)?),
            "realized_result" => FieldEdit::RealizedResult(value.to_string()),
            "option_strike_price" => FieldEdit::OptionStrikePrice(optional_number(field, value)?),
            "option_premium" => FieldEdit::OptionPremium(optional_number(field, value)?),
            "output_format" => FieldEdit::OutputFormat(value.parse()?),
            other => return Err(PlanError::UnknownField(other.to_string())),
        };
        Ok(edit)
    }

    /// Parse a `field=value` line.
    pub fn parse_assignment(line: &str) -> Result<FieldEdit> {
        let (field, value) = line
            .split_once('=')
            .ok_or_else(|| PlanError::MalformedEdit(line.to_string()))?;
        Self::parse(field, value)
    }
}

fn coerce_number(field: &str, value: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed.parse::<f64>().map_err(|_| PlanError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn optional_number(field: &str, value: &str) -> Result<Option<f64>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    coerce_number(field, value).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_blank_form() {
        let input = TradeInput::default();
        assert_eq!(input.action, Action::Open);
        assert_eq!(input.slope, Slope::One);
        assert_eq!(input.entry_price, 10.0);
        assert_eq!(input.take_profit_price, 20.0);
        assert_eq!(input.stop_loss_price, 7.0);
        assert_eq!(input.max_loss_budget, 100.0);
        assert!(input.option_contract().is_none());
    }

    #[test]
    fn symbol_edit_uppercases() {
        let mut input = TradeInput::default();
        input.apply(FieldEdit::parse("symbol", " tsla ").unwrap());
        assert_eq!(input.symbol, "TSLA");
    }

    #[test]
    fn blank_number_coerces_to_zero() {
        let mut input = TradeInput::default();
        input.apply(FieldEdit::parse("entry_price", "").unwrap());
        assert_eq!(input.entry_price, 0.0);
    }

    #[test]
    fn bad_number_is_rejected() {
        let err = FieldEdit::parse("stop_loss_price", "abc").unwrap_err();
        assert!(matches!(err, PlanError::InvalidNumber { .. }));
    }

    #[test]
    fn option_contract_needs_both_fields() {
        let mut input = TradeInput::default();
        input.apply(FieldEdit::parse("option_strike_price", "232").unwrap());
        assert!(input.option_contract().is_none());
        input.apply(FieldEdit::parse("option_premium", "17").unwrap());
        assert_eq!(
            input.option_contract(),
            Some(OptionContract {
                strike: 232.0,
                premium: 17.0
            })
        );
        input.apply(FieldEdit::parse("option_premium", "").unwrap());
        assert!(input.option_contract().is_none());
    }

    #[test]
    fn assignment_requires_equals() {
        assert!(matches!(
            FieldEdit::parse_assignment("symbol AAPL"),
            Err(PlanError::MalformedEdit(_))
        ));
        assert_eq!(
            FieldEdit::parse_assignment("action=close").unwrap(),
            FieldEdit::Action(Action::Close)
        );
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(matches!(
            FieldEdit::parse("win_price", "20"),
            Err(PlanError::UnknownField(_))
        ));
    }

    #[test]
    fn every_listed_field_parses() {
        for field in FieldEdit::FIELDS {
            let value = match field {
                "action" => "open",
                "direction" => "long",
                "weekly_trend" | "daily_trend" => "bullish",
                "slope" => "1",
                "output_format" => "plain",
                _ => "1",
            };
            assert!(FieldEdit::parse(field, value).is_ok(), "field {field}");
        }
    }

    #[test]
    fn json_over_base_keeps_missing_keys_from_base() {
        let base = TradeInput {
            output_format: OutputFormat::PlainText,
            max_loss_budget: 250.0,
            ..TradeInput::default()
        };
        let input =
            TradeInput::from_json_over(r#"{"symbol":"AAPL","max_loss_budget":50}"#, &base).unwrap();
        assert_eq!(input.symbol, "AAPL");
        assert_eq!(input.max_loss_budget, 50.0);
        assert_eq!(input.output_format, OutputFormat::PlainText);

        let input =
            TradeInput::from_json_over(r#"{"output_format":"linked_notes"}"#, &base).unwrap();
        assert_eq!(input.output_format, OutputFormat::LinkedNotes);
    }

    #[test]
    fn json_over_base_rejects_non_object() {
        assert!(TradeInput::from_json_over("[1, 2]", &TradeInput::default()).is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let input = TradeInput::from_json(
            r#"{"symbol":"NVDA","direction":"short","option_strike_price":232,"option_premium":17}"#,
        )
        .unwrap();
        assert_eq!(input.symbol, "NVDA");
        assert_eq!(input.direction, Direction::Short);
        assert_eq!(input.entry_price, 10.0);
        assert!(input.option_contract().is_some());
    }
}
