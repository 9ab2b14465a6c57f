use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Long,
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "long"),
            Direction::Short => write!(f, "short"),
        }
    }
}

impl Direction {
    /// Label used in the rendered note.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Long => "做多",
            Direction::Short => "做空",
        }
    }
}

impl FromStr for Direction {
    type Err = PlanError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" | "做多" => Ok(Direction::Long),
            "short" | "做空" => Ok(Direction::Short),
            _ => Err(PlanError::UnknownVariant {
                kind: "direction",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    #[default]
    Bullish,
    Bearish,
    Choppy,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Bullish => write!(f, "bullish"),
            Trend::Bearish => write!(f, "bearish"),
            Trend::Choppy => write!(f, "choppy"),
        }
    }
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Bullish => "多头趋势",
            Trend::Bearish => "空头趋势",
            Trend::Choppy => "震荡趋势",
        }
    }
}

impl FromStr for Trend {
    type Err = PlanError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bullish" | "多头趋势" => Ok(Trend::Bullish),
            "bearish" | "空头趋势" => Ok(Trend::Bearish),
            "choppy" | "震荡趋势" => Ok(Trend::Choppy),
            _ => Err(PlanError::UnknownVariant {
                kind: "trend",
                value: s.to_string(),
            }),
        }
    }
}

/// Trend slope read as a clock position, from flat-up (12) to flat-down (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Slope {
    #[serde(rename = "12")]
    Twelve,
    #[default]
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
}

impl Slope {
    pub const ALL: [Slope; 7] = [
        Slope::Twelve,
        Slope::One,
        Slope::Two,
        Slope::Three,
        Slope::Four,
        Slope::Five,
        Slope::Six,
    ];

    pub fn hour(&self) -> u8 {
        match self {
            Slope::Twelve => 12,
            Slope::One => 1,
            Slope::Two => 2,
            Slope::Three => 3,
            Slope::Four => 4,
            Slope::Five => 5,
            Slope::Six => 6,
        }
    }

    pub fn from_hour(hour: u8) -> Option<Slope> {
        Slope::ALL.into_iter().find(|s| s.hour() == hour)
    }

    pub fn label(&self) -> String {
        format!("{} 点钟方向", self.hour())
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} o'clock", self.hour())
    }
}

impl FromStr for Slope {
    type Err = PlanError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accepts "3", "3 o'clock" and "3 点钟方向".
        let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
        digits
            .parse::<u8>()
            .ok()
            .and_then(Slope::from_hour)
            .ok_or_else(|| PlanError::UnknownVariant {
                kind: "slope",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Open,
    Close,
    Add,
    Reduce,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Open => write!(f, "open"),
            Action::Close => write!(f, "close"),
            Action::Add => write!(f, "add"),
            Action::Reduce => write!(f, "reduce"),
        }
    }
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Open => "开仓",
            Action::Close => "平仓",
            Action::Add => "加仓",
            Action::Reduce => "减仓",
        }
    }

    /// Take-profit and stop-loss planning only applies before a position exists.
    pub fn is_opening(&self) -> bool {
        matches!(self, Action::Open)
    }
}

impl FromStr for Action {
    type Err = PlanError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" | "开仓" => Ok(Action::Open),
            "close" | "平仓" => Ok(Action::Close),
            "add" | "加仓" => Ok(Action::Add),
            "reduce" | "减仓" => Ok(Action::Reduce),
            _ => Err(PlanError::UnknownVariant {
                kind: "action",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    LinkedNotes,
    PlainText,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::LinkedNotes => write!(f, "linked_notes"),
            OutputFormat::PlainText => write!(f, "plain_text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PlanError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linked_notes" | "linked" | "org" | "true" => Ok(OutputFormat::LinkedNotes),
            "plain_text" | "plain" | "false" => Ok(OutputFormat::PlainText),
            _ => Err(PlanError::UnknownVariant {
                kind: "output format",
                value: s.to_string(),
            }),
        }
    }
}
