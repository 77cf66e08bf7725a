//! Discounted-cash-flow valuation.
//!
//! The calculation itself ([`compute`], [`compute_with`]) is a pure function
//! of three [`StatementTable`](crate::StatementTable)s and a
//! [`ValuationParams`]; it does no I/O and holds no state, so it can be called
//! from any number of threads at once.
//! [`value_company`] glues it to the statement fetcher.
//!
//! # Example
//!
//! ```
//! use dcf_valuation::{StatementTable, valuation};
//!
//! let income = StatementTable::new()
//!     .with_line("Total Revenue", [100.0, 110.0, 121.0])
//!     .with_line("Operating Income", [20.0, 22.0, 24.2]);
//! let balance = StatementTable::new()
//!     .with_line("Total Assets", [500.0])
//!     .with_line("Total Liabilities Net Minority Interest", [300.0]);
//! let cash = StatementTable::new()
//!     .with_line("Net Income", [50.0])
//!     .with_line("Depreciation", [10.0])
//!     .with_line("Change In Working Capital", [5.0])
//!     .with_line("Capital Expenditure", [20.0]);
//!
//! let m = valuation::compute(&income, &balance, &cash, 0.05, 0.10, 2).unwrap();
//! assert!((m.enterprise_value.unwrap() - 735.0).abs() < 1e-6);
//! ```

mod calc;
mod metrics;
mod params;

pub use calc::{compute, compute_with};
pub use metrics::Metrics;
pub use params::{MAX_YEARS, ParamError, ValuationParams};

use serde::Serialize;

use crate::core::{DcfError, YahooClient};
use crate::statements::{FinancialStatements, StatementsBuilder};

/// A finished valuation: the ticker as given, the parameters and the metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Valuation {
    pub ticker: String,
    pub params: ValuationParams,
    pub metrics: Metrics,
}

impl Valuation {
    /// Value already-fetched statements.
    #[must_use]
    pub fn from_statements(
        ticker: impl Into<String>,
        statements: &FinancialStatements,
        params: ValuationParams,
    ) -> Self {
        let metrics = compute_with(
            &statements.income,
            &statements.balance_sheet,
            &statements.cash_flow,
            &params,
        );
        Self {
            ticker: ticker.into(),
            params,
            metrics,
        }
    }
}

/// Fetch the annual statements of `ticker` and value them.
///
/// # Errors
///
/// Returns an error if the ticker is blank or fetching fails. Missing line
/// items are not errors.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn value_company(
    client: &YahooClient,
    ticker: &str,
    params: ValuationParams,
) -> Result<Valuation, DcfError> {
    let statements = StatementsBuilder::new(client, ticker).fetch_all().await?;
    Ok(Valuation::from_statements(ticker, &statements, params))
}
