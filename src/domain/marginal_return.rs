/// One sample of the marginal-return series.
///
/// `diff` is the margin-minus-shifted-cost difference at this volume. The
/// derived ratios are `None` where a denominator was zero or a neighbour
/// needed by the smoothing window was itself undefined; consumers must treat
/// `None` as "cannot classify", not as an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginalReturnPoint {
    pub query_count: f64,
    pub diff: f64,
    pub raw_return: Option<f64>,
    pub smoothed_return: Option<f64>,
    pub smoothed_delta: Option<f64>,
}

/// First point where the smoothed marginal return stops changing appreciably.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plateau {
    pub volume: f64,
    pub diff_at_plateau: f64,
}

/// Whether the series stabilizes in a profitable or a loss-making region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateauKind {
    Efficiency,
    Inefficiency,
}

impl Plateau {
    pub fn kind(&self) -> PlateauKind {
        if self.diff_at_plateau > 0.0 {
            PlateauKind::Efficiency
        } else {
            PlateauKind::Inefficiency
        }
    }
}
