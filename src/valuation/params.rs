use serde::Serialize;
use thiserror::Error;

/// Rejected valuation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// A rate was NaN or infinite.
    #[error("{name} must be a finite number, got {value}")]
    NonFiniteRate {
        /// Which rate (`growth_rate` or `discount_rate`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A discount rate at or below -100% makes discount factors blow up.
    #[error("discount_rate must be greater than -1, got {0}")]
    DiscountRateTooLow(f64),

    /// The projection horizon was zero.
    #[error("projection horizon must be at least one year")]
    NonPositiveHorizon,

    /// The projection horizon exceeds [`MAX_YEARS`].
    #[error("projection horizon of {0} years is too long (at most {max})", max = MAX_YEARS)]
    HorizonTooLong(u32),
}

/// Longest accepted projection horizon, in years.
pub const MAX_YEARS: u32 = 1000;

/// Growth rate, discount rate and projection horizon of one valuation.
///
/// Rates are fractional (`0.05` is five percent). A discount rate at or
/// below the growth rate is accepted here; the terminal value it would
/// produce is reported as undefined instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValuationParams {
    growth_rate: f64,
    discount_rate: f64,
    years: u32,
}

impl ValuationParams {
    /// Validate and build.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] when a rate is not finite, the discount rate is
    /// -100% or lower, or the horizon is zero or longer than [`MAX_YEARS`].
    pub fn new(growth_rate: f64, discount_rate: f64, years: u32) -> Result<Self, ParamError> {
        if !growth_rate.is_finite() {
            return Err(ParamError::NonFiniteRate {
                name: "growth_rate",
                value: growth_rate,
            });
        }
        if !discount_rate.is_finite() {
            return Err(ParamError::NonFiniteRate {
                name: "discount_rate",
                value: discount_rate,
            });
        }
        if discount_rate <= -1.0 {
            return Err(ParamError::DiscountRateTooLow(discount_rate));
        }
        if years == 0 {
            return Err(ParamError::NonPositiveHorizon);
        }
        if years > MAX_YEARS {
            return Err(ParamError::HorizonTooLong(years));
        }
        Ok(Self {
            growth_rate,
            discount_rate,
            years,
        })
    }

    #[must_use]
    pub const fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    #[must_use]
    pub const fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    #[must_use]
    pub const fn years(&self) -> u32 {
        self.years
    }

    /// Whether the Gordon Growth Model is meaningful for these rates.
    #[must_use]
    pub fn has_finite_terminal_value(&self) -> bool {
        self.discount_rate > self.growth_rate
    }

    // `years` is at most MAX_YEARS.
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) const fn exponent(&self) -> i32 {
        self.years as i32
    }
}
