use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{FieldEdit, TradeInput};
use crate::plan::{evaluate, Evaluation, PlanRenderer};

/// Holds the one mutable `TradeInput` a form would hold, and recomputes the
/// plan after every edit.
pub struct PlanSession {
    input: TradeInput,
    initial: TradeInput,
    renderer: PlanRenderer,
    current: Evaluation,
}

impl PlanSession {
    pub fn new(input: TradeInput, renderer: PlanRenderer) -> Self {
        let current = evaluate(&input, &renderer);
        Self {
            initial: input.clone(),
            input,
            renderer,
            current,
        }
    }

    pub fn input(&self) -> &TradeInput {
        &self.input
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.current
    }

    pub fn text(&self) -> &str {
        &self.current.text
    }

    pub fn apply(&mut self, edit: FieldEdit) -> &Evaluation {
        debug!("Apply edit: {:?}", edit);
        self.input.apply(edit);
        self.recompute()
    }

    /// Apply a raw `field=value` line. On error the input is left unchanged.
    pub fn apply_line(&mut self, line: &str) -> Result<&Evaluation> {
        match FieldEdit::parse_assignment(line) {
            Ok(edit) => Ok(self.apply(edit)),
            Err(e) => {
                warn!("Rejected edit {:?}: {}", line, e);
                Err(e)
            }
        }
    }

    /// Back to the input the session started with.
    pub fn reset(&mut self) -> &Evaluation {
        self.input = self.initial.clone();
        self.recompute()
    }

    fn recompute(&mut self) -> &Evaluation {
        self.current = evaluate(&self.input, &self.renderer);
        let m = &self.current.metrics;
        if self.input.action.is_opening() && !m.meets_target_ratio() {
            debug!(
                "Risk/reward {:.2} below target for {}",
                m.risk_reward_ratio, self.input.symbol
            );
        }
        &self.current
    }
}
