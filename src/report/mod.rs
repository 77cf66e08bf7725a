//! HTML presentation of valuations.

mod format;
mod templates;

pub use format::{NOT_AVAILABLE, Style, format_metric};

use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;

use crate::valuation::Valuation;

const INDEX: &str = "index";
const RESULTS: &str = "results";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Values pre-filled into the input form, plus an optional error banner.
#[derive(Debug, Clone, Serialize)]
pub struct FormView<'a> {
    pub ticker: &'a str,
    pub growth_rate: &'a str,
    pub discount_rate: &'a str,
    pub years: &'a str,
    pub error: Option<&'a str>,
}

impl Default for FormView<'_> {
    fn default() -> Self {
        Self {
            ticker: "",
            growth_rate: "0.05",
            discount_rate: "0.10",
            years: "5",
            error: None,
        }
    }
}

#[derive(Serialize)]
struct MetricRow {
    label: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ProjectionRow {
    year: usize,
    fcf: String,
    discount_factor: String,
}

#[derive(Serialize)]
struct ResultsView<'a> {
    ticker: &'a str,
    growth_rate: String,
    discount_rate: String,
    years: u32,
    metrics: Vec<MetricRow>,
    projections: Vec<ProjectionRow>,
}

/// Template registry for the form and results pages.
///
/// Interpolated values are HTML-escaped.
#[derive(Debug)]
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Register the built-in templates.
    ///
    /// # Errors
    ///
    /// Fails only if a built-in template does not parse.
    pub fn new() -> Result<Self, ReportError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(INDEX, templates::INDEX)?;
        registry.register_template_string(RESULTS, templates::RESULTS)?;
        Ok(Self { registry })
    }

    /// Render the input form.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Render`] if rendering fails.
    pub fn render_index(&self, form: &FormView<'_>) -> Result<String, ReportError> {
        Ok(self.registry.render(INDEX, form)?)
    }

    /// Render a valuation. Undefined metrics show as `N/A`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Render`] if rendering fails.
    pub fn render_results(&self, valuation: &Valuation) -> Result<String, ReportError> {
        let m = &valuation.metrics;
        let p = &valuation.params;

        let metrics = vec![
            row("Revenue growth", m.revenue_growth, Style::Percent),
            row("Operating margin", m.operating_margin, Style::Percent),
            row("Working capital", m.working_capital, Style::Money),
            row("Capital expenditure", m.capex, Style::Money),
            row("Free cash flow", m.free_cash_flow, Style::Money),
            row("Terminal value", m.terminal_value, Style::Money),
            row("Present value of FCF", m.present_value_fcf, Style::Money),
            row(
                "Present value of terminal value",
                m.present_value_terminal,
                Style::Money,
            ),
            row("Enterprise value", m.enterprise_value, Style::Money),
        ];

        let projections = m
            .projection_rows()
            .map(|(year, fcf, df)| ProjectionRow {
                year,
                fcf: format_metric(fcf, Style::Money),
                discount_factor: format_metric(Some(df), Style::Factor),
            })
            .collect();

        let view = ResultsView {
            ticker: &valuation.ticker,
            growth_rate: format_metric(Some(p.growth_rate()), Style::Percent),
            discount_rate: format_metric(Some(p.discount_rate()), Style::Percent),
            years: p.years(),
            metrics,
            projections,
        };

        Ok(self.registry.render(RESULTS, &view)?)
    }
}

fn row(label: &'static str, value: Option<f64>, style: Style) -> MetricRow {
    MetricRow {
        label,
        value: format_metric(value, style),
    }
}
