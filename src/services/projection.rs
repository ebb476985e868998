use crate::domain::cost_parameters::CostParameters;
use crate::domain::projection::ProjectionPoint;

/// Maps volume samples to aggregate profit and cost.
///
/// The returned iterator borrows the samples and holds no mutable state, so
/// the projection can be restarted by calling this again with the same
/// inputs. Order of the input samples is preserved.
pub fn project_aggregate<'a>(
    params: &CostParameters,
    approval_rate: f64,
    profit_per_approval: f64,
    volumes: &'a [f64],
) -> impl Iterator<Item = ProjectionPoint> + 'a {
    let profit_factor = approval_rate * profit_per_approval;
    let cost_per_query = params.cost_per_query;
    volumes.iter().map(move |&volume| ProjectionPoint {
        query_volume: volume,
        gross_profit: volume * profit_factor,
        total_cost: volume * cost_per_query,
    })
}
