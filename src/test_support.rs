use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::cost_parameters::CostParameters;

/// Parameters of the reference scenario used across the test suite.
pub fn reference_parameters() -> CostParameters {
    CostParameters {
        tac: 39.04,
        spread: 10.42,
        averbacao: 0.65,
        formalizacao: 2.85,
        comissao1: 35.29,
        comissao2: 2.05,
        cost_per_query: 0.25,
    }
}

pub const REFERENCE_PARAMETERS_YAML: &str = "tac: 39.04
spread: 10.42
averbacao: 0.65
formalizacao: 2.85
comissao1: 35.29
comissao2: 2.05
cost_per_query: 0.25
";

/// Writes the reference parameters to a uniquely named temp file and returns
/// its path. The caller removes the file.
pub fn write_reference_parameters_file(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("params-{tag}-{nanos}.yaml"));
    std::fs::write(&path, REFERENCE_PARAMETERS_YAML).unwrap();
    path
}
