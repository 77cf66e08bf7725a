use std::collections::HashMap;

use serde::Deserialize;

use crate::core::wire::RawNum;

/* ---------------- Serde mapping (only what we need) ---------------- */

#[derive(Deserialize)]
pub(crate) struct TimeseriesEnvelope {
    pub(crate) timeseries: Option<TimeseriesNode>,
}

#[derive(Deserialize)]
pub(crate) struct TimeseriesNode {
    pub(crate) result: Option<Vec<TimeseriesData>>,
    pub(crate) error: Option<TimeseriesError>,
}

#[derive(Deserialize)]
pub(crate) struct TimeseriesError {
    pub(crate) code: Option<String>,
    pub(crate) description: Option<String>,
}

/// One requested type. The values live under a key equal to the type name
/// (e.g. `annualTotalRevenue`), so they land in the flattened map next to
/// `meta`.
#[derive(Deserialize)]
pub(crate) struct TimeseriesData {
    pub(crate) timestamp: Option<Vec<i64>>,
    #[serde(flatten)]
    pub(crate) values: HashMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
pub(crate) struct TimeseriesValue {
    #[serde(rename = "reportedValue")]
    pub(crate) reported_value: Option<RawNum<f64>>,
}
