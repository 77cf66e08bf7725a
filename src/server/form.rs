use serde::Deserialize;
use thiserror::Error;

use crate::report::FormView;
use crate::valuation::{ParamError, ValuationParams};

/// The raw fields of the valuation form (or query string).
///
/// Every field is kept as text so a bad number can be echoed back into the
/// form; [`ValuationForm::parse`] does the coercion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValuationForm {
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub growth_rate: String,
    #[serde(default)]
    pub discount_rate: String,
    #[serde(default)]
    pub years: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("ticker is required")]
    MissingTicker,

    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("years must be a whole number, got {0:?}")]
    NotAnInteger(String),

    #[error(transparent)]
    Params(#[from] ParamError),
}

impl ValuationForm {
    /// Coerce the fields into a ticker and validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] for a blank ticker, unparsable numbers or
    /// parameters [`ValuationParams::new`] rejects.
    pub fn parse(&self) -> Result<(String, ValuationParams), FormError> {
        let ticker = self.ticker.trim();
        if ticker.is_empty() {
            return Err(FormError::MissingTicker);
        }
        let growth_rate = parse_rate("growth_rate", &self.growth_rate)?;
        let discount_rate = parse_rate("discount_rate", &self.discount_rate)?;
        let years = self
            .years
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::NotAnInteger(self.years.clone()))?;

        let params = ValuationParams::new(growth_rate, discount_rate, years)?;
        Ok((ticker.to_string(), params))
    }

    /// The form pre-filled with what the user typed.
    #[must_use]
    pub fn view<'a>(&'a self, error: Option<&'a str>) -> FormView<'a> {
        FormView {
            ticker: &self.ticker,
            growth_rate: &self.growth_rate,
            discount_rate: &self.discount_rate,
            years: &self.years,
            error,
        }
    }
}

fn parse_rate(field: &'static str, raw: &str) -> Result<f64, FormError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| FormError::NotANumber {
            field,
            value: raw.to_string(),
        })
}
