//! dcf-valuation: discounted-cash-flow valuation from Yahoo Finance statements.
//!
//! - [`statements`] fetches income statement, balance sheet and cash-flow
//!   statement tables for a ticker.
//! - [`valuation`] turns those tables plus a growth rate, a discount rate and
//!   a horizon into [`Metrics`].
//! - [`report`] renders the result as HTML.
//! - `server` (feature `server`) serves the form and results over HTTP.

pub mod core;
pub mod report;
#[cfg(feature = "server")]
pub mod server;
pub mod statements;
pub mod valuation;

pub use core::{Backoff, DcfError, RetryConfig, YahooClient, YahooClientBuilder};
pub use report::Renderer;
pub use statements::{FinancialStatements, StatementKind, StatementTable, StatementsBuilder};
pub use valuation::{Metrics, ParamError, Valuation, ValuationParams, value_company};
