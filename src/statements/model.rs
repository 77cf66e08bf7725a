use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Standard line-item names, as rendered from the provider's keys.
pub mod line_items {
    /// Income statement: total revenue.
    pub const TOTAL_REVENUE: &str = "Total Revenue";
    /// Income statement: operating income.
    pub const OPERATING_INCOME: &str = "Operating Income";
    /// Balance sheet: total assets.
    pub const TOTAL_ASSETS: &str = "Total Assets";
    /// Balance sheet: total liabilities net of minority interest.
    pub const TOTAL_LIABILITIES: &str = "Total Liabilities Net Minority Interest";
    /// Cash flow: net income.
    pub const NET_INCOME: &str = "Net Income";
    /// Cash flow: depreciation.
    pub const DEPRECIATION: &str = "Depreciation";
    /// Cash flow: change in working capital.
    pub const CHANGE_IN_WORKING_CAPITAL: &str = "Change In Working Capital";
    /// Cash flow: capital expenditure (reported negative for outflows).
    pub const CAPITAL_EXPENDITURE: &str = "Capital Expenditure";
}

/// Which of the three financial statements a table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Income,
    BalanceSheet,
    CashFlow,
}

impl StatementKind {
    /// Provider keys requested for this statement, without the period prefix.
    #[must_use]
    pub const fn provider_keys(self) -> &'static [&'static str] {
        match self {
            Self::Income => &[
                "TotalRevenue",
                "OperatingRevenue",
                "CostOfRevenue",
                "GrossProfit",
                "OperatingIncome",
                "EBIT",
                "EBITDA",
                "NetIncome",
            ],
            Self::BalanceSheet => &[
                "TotalAssets",
                "TotalLiabilitiesNetMinorityInterest",
                "StockholdersEquity",
                "CurrentAssets",
                "CurrentLiabilities",
                "WorkingCapital",
                "CashAndCashEquivalents",
                "LongTermDebt",
            ],
            Self::CashFlow => &[
                "NetIncome",
                "Depreciation",
                "DepreciationAndAmortization",
                "ChangeInWorkingCapital",
                "CapitalExpenditure",
                "OperatingCashFlow",
                "FreeCashFlow",
            ],
        }
    }

    pub(crate) const fn endpoint_name(self) -> &'static str {
        match self {
            Self::Income => "income_statement",
            Self::BalanceSheet => "balance_sheet",
            Self::CashFlow => "cash_flow",
        }
    }
}

/// A financial statement: line-item name to one value per period,
/// most-recent period first.
///
/// A line item that is present may still hold `None` for individual periods
/// the provider did not report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementTable {
    periods: Vec<NaiveDate>,
    lines: BTreeMap<String, Vec<Option<f64>>>,
}

impl StatementTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a fully reported line.
    ///
    /// ```
    /// use dcf_valuation::StatementTable;
    ///
    /// let income = StatementTable::new()
    ///     .with_line("Total Revenue", [100.0, 110.0])
    ///     .with_line("Operating Income", [20.0, 22.0]);
    /// assert_eq!(income.latest("Total Revenue"), Some(100.0));
    /// ```
    #[must_use]
    pub fn with_line(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
    ) -> Self {
        self.insert(name, values.into_iter().map(Some).collect());
        self
    }

    /// Insert or replace a line item.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<Option<f64>>) {
        self.lines.insert(name.into(), values);
    }

    /// Set the period end dates, most recent first.
    pub fn set_periods(&mut self, periods: Vec<NaiveDate>) {
        self.periods = periods;
    }

    /// Period end dates, most recent first. Empty for hand-built tables.
    #[must_use]
    pub fn periods(&self) -> &[NaiveDate] {
        &self.periods
    }

    /// Values of a line item, most recent first.
    #[must_use]
    pub fn line(&self, name: &str) -> Option<&[Option<f64>]> {
        self.lines.get(name).map(Vec::as_slice)
    }

    /// Value of a line item for the most recent period.
    #[must_use]
    pub fn latest(&self, name: &str) -> Option<f64> {
        self.line(name)
            .and_then(|values| values.first().copied().flatten())
    }

    /// Whether the line item is present at all.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lines.contains_key(name)
    }

    /// Names of all present line items, in sorted order.
    pub fn line_items(&self) -> impl Iterator<Item = &str> {
        self.lines.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<Option<f64>>)> for StatementTable {
    fn from_iter<I: IntoIterator<Item = (S, Vec<Option<f64>>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, values) in iter {
            table.insert(name, values);
        }
        table
    }
}

/// The three statements one valuation needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatements {
    pub income: StatementTable,
    pub balance_sheet: StatementTable,
    pub cash_flow: StatementTable,
}
