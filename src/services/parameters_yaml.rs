use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::cost_parameters::CostParameters;

#[derive(Error, Debug)]
pub enum ParametersYamlError {
    #[error("failed to read parameters yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse parameters yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("parameter {name} must not be negative, got {value}")]
    NegativeValue { name: &'static str, value: f64 },
    #[error("cost_per_query must be greater than zero, got {0}")]
    NonPositiveQueryCost(f64),
}

#[derive(Deserialize)]
struct ParametersRecord {
    tac: f64,
    spread: f64,
    averbacao: f64,
    formalizacao: f64,
    comissao1: f64,
    comissao2: f64,
    cost_per_query: f64,
}

pub fn load_cost_parameters_from_yaml_file(
    path: &str,
) -> Result<CostParameters, ParametersYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_cost_parameters_from_yaml_str(&contents)
}

pub fn deserialize_cost_parameters_from_yaml_str(
    contents: &str,
) -> Result<CostParameters, ParametersYamlError> {
    let record: ParametersRecord = serde_yaml::from_str(contents)?;

    for (name, value) in [
        ("tac", record.tac),
        ("spread", record.spread),
        ("averbacao", record.averbacao),
        ("formalizacao", record.formalizacao),
        ("comissao1", record.comissao1),
        ("comissao2", record.comissao2),
    ] {
        if value < 0.0 {
            return Err(ParametersYamlError::NegativeValue { name, value });
        }
    }
    if record.cost_per_query <= 0.0 {
        return Err(ParametersYamlError::NonPositiveQueryCost(
            record.cost_per_query,
        ));
    }

    Ok(CostParameters {
        tac: record.tac,
        spread: record.spread,
        averbacao: record.averbacao,
        formalizacao: record.formalizacao,
        comissao1: record.comissao1,
        comissao2: record.comissao2,
        cost_per_query: record.cost_per_query,
    })
}
