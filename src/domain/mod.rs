//! Pricing math and the input boundary for the calculator.

pub mod inputs;
pub mod pricing;

#[allow(unused_imports)]
pub use inputs::{
    parse_amount, parse_target_pct, parse_units, CalculatorInputs, ChannelPricing, CostInputs,
    TARGET_MARGIN_MAX, TARGET_MARGIN_MIN,
};
#[allow(unused_imports)]
pub use pricing::{
    case_profit, evaluate_pricing, margin_pct, margin_pct_raw, msrp_for_target_margin,
    unit_cost_before_fees, unit_profit, ChannelBreakdown, MarginSummary,
};
