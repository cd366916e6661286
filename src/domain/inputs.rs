//! Form state and the boundary that turns raw field text into numbers.
//!
//! The page keeps each field as the string the user typed and runs it
//! through these parsers on every recompute, so a half-typed value never
//! produces an undefined result.

/// Slider bounds for the target-margin control.
pub const TARGET_MARGIN_MIN: f64 = 30.0;
pub const TARGET_MARGIN_MAX: f64 = 80.0;

/// Per-unit cost components plus the wholesale case size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostInputs {
    pub cogs: f64,
    pub packaging: f64,
    pub ship_fulfill: f64,
    pub overhead: f64,
    pub units_per_case: u32,
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            cogs: 2.2,
            packaging: 0.35,
            ship_fulfill: 0.6,
            overhead: 0.25,
            units_per_case: 6,
        }
    }
}

/// Sell price and fee percentage for one sales channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelPricing {
    pub price: f64,
    pub fee_pct: f64,
}

/// One full scenario: costs, both channels, and the margin target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculatorInputs {
    pub costs: CostInputs,
    pub retail: ChannelPricing,
    pub wholesale: ChannelPricing,
    pub target_margin_pct: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            costs: CostInputs::default(),
            retail: ChannelPricing {
                price: 11.99,
                fee_pct: 7.0,
            },
            wholesale: ChannelPricing {
                price: 6.0,
                fee_pct: 3.0,
            },
            target_margin_pct: 60.0,
        }
    }
}

/// Parses a currency or percent field. Text that does not parse, or parses
/// to a non-finite value, collapses to zero; negatives clamp up to zero.
pub fn parse_amount(raw: &str) -> f64 {
    let value: f64 = raw.trim().parse().unwrap_or(0.0);
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Parses the units-per-case field. Fractional input truncates toward zero;
/// a case holds whole units.
pub fn parse_units(raw: &str) -> u32 {
    parse_amount(raw).trunc() as u32
}

/// Parses the target-margin field and clamps it into the slider range.
pub fn parse_target_pct(raw: &str) -> f64 {
    parse_amount(raw).clamp(TARGET_MARGIN_MIN, TARGET_MARGIN_MAX)
}
