/// Unit contribution margin (MCU) and its components for one contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginResult {
    pub gross_revenue: f64,
    pub variable_costs: f64,
    pub unit_margin: f64,
}

/// The largest query count at which the unit margin is still non-negative.
///
/// At `max_queries + 1` the margin is guaranteed negative; flooring the
/// breakeven division keeps `margin_at_limit >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakevenResult {
    pub max_queries: u64,
    pub margin_at_limit: f64,
}
