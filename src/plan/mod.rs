pub mod format;
pub mod renderer;

pub use renderer::{PlanRenderer, DEFAULT_LINK_SCHEME};

use crate::core::metrics::{self, DerivedMetrics};
use crate::models::TradeInput;

/// One pass of the pipeline: metrics and the text built from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub metrics: DerivedMetrics,
    pub text: String,
}

/// Recompute everything from the current input. Same input, same bytes.
pub fn evaluate(input: &TradeInput, renderer: &PlanRenderer) -> Evaluation {
    let metrics = metrics::calculate(input);
    let text = renderer.render(input, &metrics);
    Evaluation { metrics, text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::default_input;

    #[test]
    fn evaluate_is_idempotent() {
        let input = default_input();
        let renderer = PlanRenderer::default();
        let first = evaluate(&input, &renderer);
        let second = evaluate(&input, &renderer);
        assert_eq!(first.text, second.text);
        assert_eq!(first.metrics, second.metrics);
    }
}
