pub mod analysis;
pub mod margin_calculation;
pub mod marginal_return;
pub mod parameters_yaml;
pub mod projection;
pub mod report_types;
pub mod sample_range;
