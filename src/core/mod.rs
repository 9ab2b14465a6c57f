pub mod metrics;

pub use metrics::{calculate, DerivedMetrics, OptionMetrics};
