use serde::{Deserialize, Serialize};

/// Result of one DCF valuation.
///
/// Every optional field is `None` when an input it depends on was missing or
/// when the math is degenerate; it is never zero-filled. Serialized, `None`
/// becomes `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean period-over-period change of total revenue.
    pub revenue_growth: Option<f64>,
    /// Mean of operating income over total revenue.
    pub operating_margin: Option<f64>,
    /// Mean of total assets minus total liabilities.
    pub working_capital: Option<f64>,
    /// Mean reported capital expenditure.
    pub capex: Option<f64>,
    /// Free cash flow of the most recent period.
    pub free_cash_flow: Option<f64>,
    /// Projected free cash flow for years `1..=horizon`.
    pub fcf_projections: Vec<Option<f64>>,
    /// `1 / (1 + discount_rate)^i` for years `1..=horizon`.
    pub discount_factors: Vec<f64>,
    /// Undiscounted Gordon Growth terminal value.
    pub terminal_value: Option<f64>,
    /// Sum of the projections, each multiplied by its discount factor.
    pub present_value_fcf: Option<f64>,
    /// Terminal value discounted over the whole horizon.
    pub present_value_terminal: Option<f64>,
    /// Present value of projected cash flows plus present value of the
    /// terminal value.
    pub enterprise_value: Option<f64>,
}

impl Metrics {
    /// Projection horizon in years.
    #[must_use]
    pub fn years(&self) -> usize {
        self.discount_factors.len()
    }

    /// Year-indexed rows `(year, projected fcf, discount factor)`.
    pub fn projection_rows(&self) -> impl Iterator<Item = (usize, Option<f64>, f64)> + '_ {
        self.fcf_projections
            .iter()
            .zip(&self.discount_factors)
            .enumerate()
            .map(|(i, (fcf, df))| (i + 1, *fcf, *df))
    }
}
