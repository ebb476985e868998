pub mod cost_parameters;
pub mod margin;
pub mod marginal_return;
pub mod projection;
