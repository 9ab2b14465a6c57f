use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors raised while turning raw field text into a `TradeInput`.
///
/// The calculator and renderer never fail; everything here belongs to the
/// input side.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Malformed edit (expected field=value): {0}")]
    MalformedEdit(String),

    #[error("Input parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
