//! Financial statements (income, balance sheet, cash flow) from the Yahoo
//! fundamentals-timeseries endpoint.

mod fetch;
mod model;
mod wire;

pub use model::{FinancialStatements, StatementKind, StatementTable, line_items};

use crate::core::{DcfError, RetryConfig, YahooClient};

/// A builder for fetching the statements of one symbol.
///
/// # Example
///
/// ```no_run
/// # use dcf_valuation::{StatementsBuilder, YahooClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = YahooClient::new()?;
/// let statements = StatementsBuilder::new(&client, "MSFT").fetch_all().await?;
/// println!("{:?}", statements.income.latest("Total Revenue"));
/// # Ok(())
/// # }
/// ```
pub struct StatementsBuilder {
    client: YahooClient,
    symbol: String,
    quarterly: bool,
    retry_override: Option<RetryConfig>,
}

impl StatementsBuilder {
    /// Creates a new builder for annual statements of `symbol`.
    pub fn new(client: &YahooClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            quarterly: false,
            retry_override: None,
        }
    }

    /// Request quarterly instead of annual periods.
    #[must_use]
    pub const fn quarterly(mut self, yes: bool) -> Self {
        self.quarterly = yes;
        self
    }

    /// Overrides the client's default retry policy for calls made by this builder.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// The symbol this builder fetches, trimmed.
    #[must_use]
    pub fn symbol(&self) -> &str {
        self.symbol.trim()
    }

    /// Fetches the income statement.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is blank, the request fails or the
    /// provider answers with an error object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn income_statement(&self) -> Result<StatementTable, DcfError> {
        self.fetch(StatementKind::Income).await
    }

    /// Fetches the balance sheet.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is blank, the request fails or the
    /// provider answers with an error object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn balance_sheet(&self) -> Result<StatementTable, DcfError> {
        self.fetch(StatementKind::BalanceSheet).await
    }

    /// Fetches the cash-flow statement.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is blank, the request fails or the
    /// provider answers with an error object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn cash_flow(&self) -> Result<StatementTable, DcfError> {
        self.fetch(StatementKind::CashFlow).await
    }

    /// Fetches all three statements concurrently.
    ///
    /// # Errors
    ///
    /// Fails with the first error any of the three requests produces.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch_all(&self) -> Result<FinancialStatements, DcfError> {
        let (income, balance_sheet, cash_flow) = tokio::try_join!(
            self.income_statement(),
            self.balance_sheet(),
            self.cash_flow()
        )?;
        Ok(FinancialStatements {
            income,
            balance_sheet,
            cash_flow,
        })
    }

    async fn fetch(&self, kind: StatementKind) -> Result<StatementTable, DcfError> {
        let symbol = self.symbol();
        if symbol.is_empty() {
            return Err(DcfError::InvalidSymbol);
        }
        fetch::fetch_statement(
            &self.client,
            symbol,
            kind,
            self.quarterly,
            self.retry_override.as_ref(),
        )
        .await
    }
}
