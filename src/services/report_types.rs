use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct MarginReport {
    pub data_source: String,
    pub query_count: u64,
    pub gross_revenue: f64,
    pub variable_costs: f64,
    pub unit_margin: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct BreakevenReport {
    pub data_source: String,
    /// `None` means the fixed variable costs already exhaust the revenue and
    /// no query count breaks even.
    pub breakeven: Option<BreakevenLimit>,
}

#[derive(Serialize, Debug, Clone)]
pub struct BreakevenLimit {
    pub max_queries: u64,
    pub margin_at_limit: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct ProjectionReport {
    pub data_source: String,
    pub approval_rate: f64,
    pub profit_per_approval: f64,
    pub points: Vec<ProjectionRecord>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ProjectionRecord {
    pub query_volume: f64,
    pub gross_profit: f64,
    pub total_cost: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct PlateauReport {
    pub data_source: String,
    pub unit_mcu: f64,
    pub threshold: f64,
    /// `None` when no sample crossed the threshold.
    pub plateau: Option<PlateauRecord>,
    pub points: Vec<MarginalReturnRecord>,
}

#[derive(Serialize, Debug, Clone)]
pub struct PlateauRecord {
    pub volume: f64,
    pub diff_at_plateau: f64,
    pub classification: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct MarginalReturnRecord {
    pub query_count: f64,
    pub diff: f64,
    pub raw_return: Option<f64>,
    pub smoothed_return: Option<f64>,
    pub smoothed_delta: Option<f64>,
}
