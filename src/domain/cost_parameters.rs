/// Per-contract pricing and cost inputs for a credit-origination product.
///
/// All monetary fields are non-negative; `cost_per_query` is strictly
/// positive. Both constraints are enforced when parameters are loaded from
/// YAML, so values constructed through that path are always valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostParameters {
    /// Credit opening fee (TAC) charged per contract.
    pub tac: f64,
    /// Interest spread earned per contract.
    pub spread: f64,
    /// Registration cost per contract.
    pub averbacao: f64,
    /// Formalization cost per contract.
    pub formalizacao: f64,
    /// First commission per contract.
    pub comissao1: f64,
    /// Second commission per contract.
    pub comissao2: f64,
    /// Cost of a single bureau query.
    pub cost_per_query: f64,
}

impl CostParameters {
    /// Gross revenue per contract, before any variable costs.
    pub fn gross_revenue(&self) -> f64 {
        self.tac + self.spread
    }

    /// Variable costs that do not depend on the query count.
    pub fn fixed_variable_sum(&self) -> f64 {
        self.averbacao + self.formalizacao + self.comissao1 + self.comissao2
    }
}

impl Default for CostParameters {
    /// Reference values of the original product.
    fn default() -> Self {
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
}
