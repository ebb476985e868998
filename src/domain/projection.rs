/// One sample of the aggregate profit-vs-cost projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPoint {
    /// Total number of bureau queries issued at this sample.
    pub query_volume: f64,
    /// Expected gross profit: volume x approval rate x profit per approval.
    pub gross_profit: f64,
    /// Total query cost: volume x cost per query.
    pub total_cost: f64,
}
