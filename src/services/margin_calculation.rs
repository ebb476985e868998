use crate::domain::cost_parameters::CostParameters;
use crate::domain::margin::{BreakevenResult, MarginResult};

/// Computes the unit contribution margin for a contract that issues
/// `query_count` bureau queries. All arithmetic is total; the result is
/// deterministic and side-effect free.
pub fn compute_margin(params: &CostParameters, query_count: u64) -> MarginResult {
    let gross_revenue = params.gross_revenue();
    let variable_costs = params.fixed_variable_sum() + query_count as f64 * params.cost_per_query;
    MarginResult {
        gross_revenue,
        variable_costs,
        unit_margin: gross_revenue - variable_costs,
    }
}

/// Computes the maximum query count before the unit margin turns negative.
///
/// Returns `None` when the margin available for queries is already exhausted
/// by the fixed variable costs, or when queries are free and the limit is
/// undefined.
pub fn compute_breakeven(params: &CostParameters) -> Option<BreakevenResult> {
    let available_margin = params.gross_revenue() - params.fixed_variable_sum();
    if available_margin <= 0.0 || params.cost_per_query <= 0.0 {
        return None;
    }

    let max_queries = (available_margin / params.cost_per_query).floor() as u64;
    let margin_at_limit = compute_margin(params, max_queries).unit_margin;
    Some(BreakevenResult {
        max_queries,
        margin_at_limit,
    })
}
