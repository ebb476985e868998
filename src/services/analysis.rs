use thiserror::Error;

use crate::domain::cost_parameters::CostParameters;
use crate::domain::marginal_return::PlateauKind;
use crate::services::margin_calculation::{compute_breakeven, compute_margin};
use crate::services::marginal_return::{compute_marginal_return_series, detect_plateau};
use crate::services::parameters_yaml::{load_cost_parameters_from_yaml_file, ParametersYamlError};
use crate::services::projection::project_aggregate;
use crate::services::report_types::{
    BreakevenLimit, BreakevenReport, MarginReport, MarginalReturnRecord, PlateauRecord,
    PlateauReport, ProjectionRecord, ProjectionReport,
};
use crate::services::sample_range::linear_samples;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("failed to load cost parameters: {0}")]
    Parameters(#[from] ParametersYamlError),
    #[error("approval rate must be in (0, 1], got {0}")]
    InvalidApprovalRate(f64),
    #[error("profit per approval must not be negative, got {0}")]
    NegativeProfitPerApproval(f64),
    #[error("sample count must be at least {minimum}, got {actual}")]
    TooFewSamples { minimum: usize, actual: usize },
    #[error("volume range must be non-negative and increasing, got [{min}, {max}]")]
    InvalidVolumeRange { min: f64, max: f64 },
    #[error("threshold must be finite and not negative, got {0}")]
    InvalidThreshold(f64),
}

pub fn margin_from_parameters_file(
    parameters_path: &str,
    query_count: u64,
) -> Result<MarginReport, AnalysisError> {
    let params = load_cost_parameters_from_yaml_file(parameters_path)?;
    let result = compute_margin(&params, query_count);

    Ok(MarginReport {
        data_source: data_source_name(parameters_path),
        query_count,
        gross_revenue: result.gross_revenue,
        variable_costs: result.variable_costs,
        unit_margin: result.unit_margin,
    })
}

pub fn breakeven_from_parameters_file(
    parameters_path: &str,
) -> Result<BreakevenReport, AnalysisError> {
    let params = load_cost_parameters_from_yaml_file(parameters_path)?;
    let breakeven = compute_breakeven(&params).map(|result| BreakevenLimit {
        max_queries: result.max_queries,
        margin_at_limit: result.margin_at_limit,
    });

    Ok(BreakevenReport {
        data_source: data_source_name(parameters_path),
        breakeven,
    })
}

pub fn projection_from_parameters_file(
    parameters_path: &str,
    approval_rate: f64,
    profit_per_approval: f64,
    max_volume: f64,
    samples: usize,
) -> Result<ProjectionReport, AnalysisError> {
    if !(approval_rate > 0.0 && approval_rate <= 1.0) {
        return Err(AnalysisError::InvalidApprovalRate(approval_rate));
    }
    if profit_per_approval < 0.0 {
        return Err(AnalysisError::NegativeProfitPerApproval(profit_per_approval));
    }
    if samples < 2 {
        return Err(AnalysisError::TooFewSamples {
            minimum: 2,
            actual: samples,
        });
    }
    if max_volume <= 0.0 {
        return Err(AnalysisError::InvalidVolumeRange {
            min: 0.0,
            max: max_volume,
        });
    }

    let params = load_cost_parameters_from_yaml_file(parameters_path)?;
    let volumes = linear_samples(0.0, max_volume, samples);
    let points = project_aggregate(&params, approval_rate, profit_per_approval, &volumes)
        .map(|point| ProjectionRecord {
            query_volume: point.query_volume,
            gross_profit: point.gross_profit,
            total_cost: point.total_cost,
        })
        .collect();

    Ok(ProjectionReport {
        data_source: data_source_name(parameters_path),
        approval_rate,
        profit_per_approval,
        points,
    })
}

pub fn plateau_from_parameters_file(
    parameters_path: &str,
    unit_mcu: Option<f64>,
    min_volume: f64,
    max_volume: f64,
    samples: usize,
    threshold: f64,
) -> Result<PlateauReport, AnalysisError> {
    // The smoothing window needs at least one fully defined point past the
    // two dropped samples.
    if samples < 4 {
        return Err(AnalysisError::TooFewSamples {
            minimum: 4,
            actual: samples,
        });
    }
    if min_volume < 0.0 || max_volume <= min_volume {
        return Err(AnalysisError::InvalidVolumeRange {
            min: min_volume,
            max: max_volume,
        });
    }
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(AnalysisError::InvalidThreshold(threshold));
    }

    let params = load_cost_parameters_from_yaml_file(parameters_path)?;
    // When no explicit unit MCU is given, use the margin left before any
    // query is issued.
    let unit_mcu = unit_mcu.unwrap_or_else(|| zero_query_margin(&params));

    let volumes = linear_samples(min_volume, max_volume, samples);
    let series = compute_marginal_return_series(&volumes, unit_mcu, params.cost_per_query);
    let plateau = detect_plateau(&series, threshold).map(|plateau| PlateauRecord {
        volume: plateau.volume,
        diff_at_plateau: plateau.diff_at_plateau,
        classification: classification_name(plateau.kind()).to_string(),
    });

    let points = series
        .iter()
        .map(|point| MarginalReturnRecord {
            query_count: point.query_count,
            diff: point.diff,
            raw_return: point.raw_return,
            smoothed_return: point.smoothed_return,
            smoothed_delta: point.smoothed_delta,
        })
        .collect();

    Ok(PlateauReport {
        data_source: data_source_name(parameters_path),
        unit_mcu,
        threshold,
        plateau,
        points,
    })
}

fn zero_query_margin(params: &CostParameters) -> f64 {
    compute_margin(params, 0).unit_margin
}

pub fn classification_name(kind: PlateauKind) -> &'static str {
    match kind {
        PlateauKind::Efficiency => "efficiency",
        PlateauKind::Inefficiency => "inefficiency",
    }
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
