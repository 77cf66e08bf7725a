use crate::statements::{StatementTable, line_items};

use super::metrics::Metrics;
use super::params::{ParamError, ValuationParams};

/// Run the DCF calculation on raw parameters.
///
/// This validates the parameters and then behaves exactly like
/// [`compute_with`].
///
/// # Errors
///
/// Returns [`ParamError`] for malformed parameters only. Missing line items
/// never fail; they surface as `None` metrics.
pub fn compute(
    income: &StatementTable,
    balance_sheet: &StatementTable,
    cash_flow: &StatementTable,
    growth_rate: f64,
    discount_rate: f64,
    years: u32,
) -> Result<Metrics, ParamError> {
    let params = ValuationParams::new(growth_rate, discount_rate, years)?;
    Ok(compute_with(income, balance_sheet, cash_flow, &params))
}

/// Run the DCF calculation on validated parameters.
///
/// Steps, in order:
/// 1. mean period-over-period revenue growth;
/// 2. mean operating margin;
/// 3. mean of total assets minus total liabilities;
/// 4. mean capital expenditure;
/// 5. current FCF = net income + depreciation - change in working capital - capex,
///    from the most recent cash-flow period and the mean capex;
/// 6. FCF projected at the growth rate for each year of the horizon;
/// 7. Gordon Growth terminal value on the last projection;
/// 8. discount factors;
/// 9. present value of the projected cash flows;
/// 10. present value of the terminal value;
/// 11. enterprise value as the sum of the two.
///
/// Any step whose inputs are undefined yields `None`, and so does every step
/// downstream of it. A step that overflows or underflows to a non-finite
/// number is undefined too. The terminal value is also `None` when the discount rate
/// does not exceed the growth rate.
#[must_use]
pub fn compute_with(
    income: &StatementTable,
    balance_sheet: &StatementTable,
    cash_flow: &StatementTable,
    params: &ValuationParams,
) -> Metrics {
    let g = params.growth_rate();
    let r = params.discount_rate();
    let n = params.exponent();

    let revenue_growth = revenue_growth(income);
    let operating_margin = operating_margin(income);
    let working_capital = working_capital(balance_sheet);
    let capex = capex(cash_flow);
    let free_cash_flow = free_cash_flow(cash_flow, capex);

    let fcf_projections: Vec<Option<f64>> = (1..=n)
        .map(|i| {
            free_cash_flow
                .map(|fcf| fcf * (1.0 + g).powi(i))
                .filter(|v| v.is_finite())
        })
        .collect();

    let terminal_value = if params.has_finite_terminal_value() {
        fcf_projections
            .last()
            .copied()
            .flatten()
            .map(|last| last * (1.0 + g) / (r - g))
            .filter(|tv| tv.is_finite())
    } else {
        None
    };

    let discount_factors: Vec<f64> = (1..=n).map(|i| 1.0 / (1.0 + r).powi(i)).collect();

    // Sum over Option is None as soon as one projection is None.
    let present_value_fcf = free_cash_flow.and_then(|_| {
        fcf_projections
            .iter()
            .zip(&discount_factors)
            .map(|(fcf, df)| fcf.map(|f| f * df))
            .sum::<Option<f64>>()
            .filter(|pv| pv.is_finite())
    });

    let present_value_terminal = terminal_value
        .map(|tv| tv / (1.0 + r).powi(n))
        .filter(|pv| pv.is_finite());

    let enterprise_value = present_value_fcf
        .zip(present_value_terminal)
        .map(|(fcf, tv)| fcf + tv)
        .filter(|ev| ev.is_finite());

    #[cfg(feature = "tracing")]
    tracing::debug!(
        ?revenue_growth,
        ?free_cash_flow,
        ?terminal_value,
        ?enterprise_value,
        years = n,
        "dcf computed"
    );

    Metrics {
        revenue_growth,
        operating_margin,
        working_capital,
        capex,
        free_cash_flow,
        fcf_projections,
        discount_factors,
        terminal_value,
        present_value_fcf,
        present_value_terminal,
        enterprise_value,
    }
}

/* ---------------- per-metric reductions ---------------- */

fn defined(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0u32), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / f64::from(count))
}

fn ratio(num: f64, den: f64) -> Option<f64> {
    (den != 0.0).then(|| num / den)
}

/// Mean of `(v[i] - v[i-1]) / v[i-1]` along the table's period order.
fn revenue_growth(income: &StatementTable) -> Option<f64> {
    let revenue = income.line(line_items::TOTAL_REVENUE)?;
    if revenue.len() < 2 {
        return None;
    }
    mean(revenue.windows(2).filter_map(|pair| {
        let prev = defined(pair[0])?;
        let cur = defined(pair[1])?;
        ratio(cur - prev, prev)
    }))
}

fn operating_margin(income: &StatementTable) -> Option<f64> {
    let operating = income.line(line_items::OPERATING_INCOME)?;
    let revenue = income.line(line_items::TOTAL_REVENUE)?;
    mean(
        operating
            .iter()
            .zip(revenue)
            .filter_map(|(op, rev)| ratio(defined(*op)?, defined(*rev)?)),
    )
}

// Total assets/liabilities, not the current subset.
fn working_capital(balance_sheet: &StatementTable) -> Option<f64> {
    let assets = balance_sheet.line(line_items::TOTAL_ASSETS)?;
    let liabilities = balance_sheet.line(line_items::TOTAL_LIABILITIES)?;
    mean(
        assets
            .iter()
            .zip(liabilities)
            .filter_map(|(a, l)| Some(defined(*a)? - defined(*l)?)),
    )
}

fn capex(cash_flow: &StatementTable) -> Option<f64> {
    let capex = cash_flow.line(line_items::CAPITAL_EXPENDITURE)?;
    mean(capex.iter().filter_map(|v| defined(*v)))
}

fn free_cash_flow(cash_flow: &StatementTable, capex: Option<f64>) -> Option<f64> {
    let net_income = defined(cash_flow.latest(line_items::NET_INCOME))?;
    let depreciation = defined(cash_flow.latest(line_items::DEPRECIATION))?;
    let change_in_wc = defined(cash_flow.latest(line_items::CHANGE_IN_WORKING_CAPITAL))?;
    let capex = capex?;
    Some(net_income + depreciation - change_in_wc - capex)
}
