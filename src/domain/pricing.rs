//! Pure pricing math shared by the live stats panel and the CSV export.
//!
//! Every function here is total over finite inputs and side-effect free;
//! the page recomputes the whole [`MarginSummary`] on each input change.

use super::inputs::{CalculatorInputs, ChannelPricing, CostInputs};

/// Sum of the per-unit cost components, before any channel fees.
pub fn unit_cost_before_fees(costs: &CostInputs) -> f64 {
    costs.cogs + costs.packaging + costs.ship_fulfill + costs.overhead
}

/// Margin after channel fees as a percentage of the sell price, without the
/// display floor. Negative when the channel sells at a loss; zero when the
/// price is zero or negative (margin is undefined without revenue).
pub fn margin_pct_raw(price: f64, unit_cost: f64, fee_pct: f64) -> f64 {
    if price <= 0.0 {
        return 0.0;
    }
    let fees = (fee_pct / 100.0) * price;
    ((price - fees - unit_cost) / price) * 100.0
}

/// Display margin: [`margin_pct_raw`] floored at zero. The stats panel and
/// the export never show a negative margin; [`unit_profit`] carries the loss.
pub fn margin_pct(price: f64, unit_cost: f64, fee_pct: f64) -> f64 {
    margin_pct_raw(price, unit_cost, fee_pct).max(0.0)
}

/// Profit per unit after fees. Not floored like [`margin_pct`]; a negative
/// value is the loss per unit sold.
pub fn unit_profit(price: f64, unit_cost: f64, fee_pct: f64) -> f64 {
    price * (1.0 - fee_pct / 100.0) - unit_cost
}

/// Profit for one wholesale case, inheriting the sign of the unit profit.
pub fn case_profit(unit_profit: f64, units_per_case: u32) -> f64 {
    unit_profit * units_per_case as f64
}

/// Sell price that lands on `target_pct` margin after a `fee_pct` fee.
/// Returns `None` when fee plus target leave nothing to cover cost
/// (denominator <= 0), or when the cost is large enough that the quotient
/// overflows; either way no finite price reaches the target.
pub fn msrp_for_target_margin(target_pct: f64, unit_cost: f64, fee_pct: f64) -> Option<f64> {
    let denom = 1.0 - fee_pct / 100.0 - target_pct / 100.0;
    if denom <= 0.0 {
        return None;
    }
    Some(unit_cost / denom).filter(|price| price.is_finite())
}

/// Derived numbers for one sales channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelBreakdown {
    pub margin_pct: f64,
    pub unit_profit: f64,
    pub case_profit: f64,
}

/// Everything the page and the export derive from one set of inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarginSummary {
    pub unit_cost: f64,
    pub retail: ChannelBreakdown,
    pub wholesale: ChannelBreakdown,
    /// `None` when the target margin is unreachable at the retail fee.
    pub required_msrp: Option<f64>,
}

/// Recomputes the full summary for one scenario. The required MSRP answers
/// the target-margin question for the retail channel's fee.
pub fn evaluate_pricing(inputs: &CalculatorInputs) -> MarginSummary {
    let unit_cost = unit_cost_before_fees(&inputs.costs);
    MarginSummary {
        unit_cost,
        retail: channel_breakdown(&inputs.retail, unit_cost, inputs.costs.units_per_case),
        wholesale: channel_breakdown(&inputs.wholesale, unit_cost, inputs.costs.units_per_case),
        required_msrp: msrp_for_target_margin(
            inputs.target_margin_pct,
            unit_cost,
            inputs.retail.fee_pct,
        ),
    }
}

fn channel_breakdown(
    channel: &ChannelPricing,
    unit_cost: f64,
    units_per_case: u32,
) -> ChannelBreakdown {
    let profit = unit_profit(channel.price, unit_cost, channel.fee_pct);
    ChannelBreakdown {
        margin_pct: margin_pct(channel.price, unit_cost, channel.fee_pct),
        unit_profit: profit,
        case_profit: case_profit(profit, units_per_case),
    }
}
