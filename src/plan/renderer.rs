use std::fmt;

use crate::core::metrics::{DerivedMetrics, OptionMetrics};
use crate::models::{OutputFormat, TradeInput};
use crate::plan::format::{fixed2, percent, percent_units, whole_units};

pub const DEFAULT_LINK_SCHEME: &str = "roam";

const TAKE_PROFIT_PROMPT: &str = "如果市場運行方向符合預期，你打算在何種情況下止盈出局：";
const STOP_LOSS_PROMPT: &str = "如果市場運行方向不符合預期，你打算在何種情況下止損出局：";

/// Renders a plan as an outline entry for the notes system.
///
/// In `OutputFormat::LinkedNotes` the title and the symbol become
/// `[[scheme:target]]` references; everything else is identical between the
/// two formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRenderer {
    link_scheme: String,
}

impl Default for PlanRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_SCHEME)
    }
}

impl PlanRenderer {
    pub fn new(link_scheme: impl Into<String>) -> Self {
        Self {
            link_scheme: link_scheme.into(),
        }
    }

    pub fn link_scheme(&self) -> &str {
        &self.link_scheme
    }

    pub fn render(&self, input: &TradeInput, metrics: &DerivedMetrics) -> String {
        PlanText {
            renderer: self,
            input,
            metrics,
        }
        .to_string()
    }

    fn reference(&self, format: OutputFormat, target: &str) -> String {
        match format {
            OutputFormat::LinkedNotes => format!("[[{}:{}]]", self.link_scheme, target),
            OutputFormat::PlainText => target.to_string(),
        }
    }
}

struct PlanText<'a> {
    renderer: &'a PlanRenderer,
    input: &'a TradeInput,
    metrics: &'a DerivedMetrics,
}

impl PlanText<'_> {
    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = self.input;
        let format = input.output_format;
        let title = self
            .renderer
            .reference(format, &format!("{}记录", input.action.label()));
        let symbol = self
            .renderer
            .reference(format, &format!("${}", input.symbol));

        writeln!(f, "** {} {}", input.symbol, title)?;
        writeln!(f, "- 代码：{}", symbol)?;
        writeln!(f, "- 操作：{}", input.action.label())?;
        writeln!(f, "- 周线趋势：{}", input.weekly_trend.label())?;
        writeln!(f, "- 日线趋势：{}", input.daily_trend.label())?;
        writeln!(f, "- 趋势的斜率为：{}", input.slope.label())?;
        writeln!(f)?;
        writeln!(f, "- 计划{}", input.direction.label())?;
        writeln!(f, "- 交易价格：{}", fixed2(input.entry_price))?;
        writeln!(f, "- 交易理由：")?;
        write_note(f, &input.rationale)
    }

    fn write_exit_plan(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = self.input;
        let metrics = self.metrics;

        writeln!(f)?;
        writeln!(f, "- 止盈价：{}", fixed2(input.take_profit_price))?;
        writeln!(f, "- 止盈计划：")?;
        writeln!(f, "  {}", TAKE_PROFIT_PROMPT)?;
        write_note(f, &input.take_profit_rationale)?;
        writeln!(f)?;
        writeln!(f, "- 止损价：{}", fixed2(input.stop_loss_price))?;
        writeln!(f, "- 止损计划：")?;
        writeln!(f, "  {}", STOP_LOSS_PROMPT)?;
        write_note(f, &input.stop_loss_rationale)?;
        writeln!(f)?;
        writeln!(f, "- 盈亏比：{}", fixed2(metrics.risk_reward_ratio))?;
        writeln!(f, "- 正股收益率：{}", percent(metrics.underlying_roi))?;
        writeln!(f)?;
        writeln!(f, "风险管理：")?;
        writeln!(f, "- 最大可承受亏损金额：{}", fixed2(input.max_loss_budget))?;
        writeln!(
            f,
            "- 最多可持有的头寸数量：{}",
            whole_units(metrics.max_position_size)
        )?;

        if let (Some(contract), Some(option)) = (input.option_contract(), &metrics.option) {
            writeln!(f)?;
            writeln!(f, "期权：")?;
            writeln!(f, "- 行权价：{}", fixed2(contract.strike))?;
            writeln!(f, "- 权利金：{}", fixed2(contract.premium))?;
            write_option_economics(f, option)?;
        }
        Ok(())
    }

    /// First line stays on the bullet, the rest indent like any other note.
    fn write_result(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.input.realized_result.trim().lines();
        writeln!(f)?;
        writeln!(f, "- 盈亏金额：{}", lines.next().unwrap_or_default())?;
        for line in lines {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        if self.input.action.is_opening() {
            self.write_exit_plan(f)?;
            // Opening plans close with a blank line, result entries do not.
            writeln!(f)
        } else {
            self.write_result(f)
        }
    }
}

fn write_option_economics(f: &mut fmt::Formatter<'_>, option: &OptionMetrics) -> fmt::Result {
    writeln!(f, "- 总成本：{}", fixed2(option.total_cost))?;
    writeln!(f, "- 止盈盈亏：{}", fixed2(option.profit))?;
    writeln!(f, "- 止损盈亏：{}", fixed2(option.loss))?;
    writeln!(f, "- 期权收益率：{}", percent_units(option.roi))?;
    writeln!(f, "- 期权盈亏比：{}", fixed2(option.profit_loss_ratio))
}

/// Free text indented under its bullet, every line of it.
fn write_note(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let text = text.trim_end();
    if text.is_empty() {
        return writeln!(f, "  ");
    }
    for line in text.lines() {
        writeln!(f, "  {}", line)?;
    }
    Ok(())
}
