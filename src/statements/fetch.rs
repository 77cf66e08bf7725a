use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::core::wire::from_raw;
use crate::core::{DcfError, RetryConfig, YahooClient, net};

use super::model::{StatementKind, StatementTable};
use super::wire::{TimeseriesData, TimeseriesEnvelope, TimeseriesValue};

const LOOKBACK_DAYS: i64 = 365 * 5;

/// Fetch one statement from the fundamentals-timeseries endpoint.
///
/// A rejected crumb (HTTP 401, or an `Invalid Crumb` error object) ends the
/// session and the request is repeated once under a new one.
pub(super) async fn fetch_statement(
    client: &YahooClient,
    symbol: &str,
    kind: StatementKind,
    quarterly: bool,
    retry_override: Option<&RetryConfig>,
) -> Result<StatementTable, DcfError> {
    let prefix = if quarterly { "quarterly" } else { "annual" };
    let type_str = kind
        .provider_keys()
        .iter()
        .map(|k| format!("{prefix}{k}"))
        .collect::<Vec<_>>()
        .join(",");

    let end_ts = Utc::now().timestamp();
    let start_ts = Utc::now()
        .checked_sub_signed(Duration::days(LOOKBACK_DAYS))
        .map_or(0, |dt| dt.timestamp());

    for attempt in 0..=1 {
        let mut url = client.base_timeseries().join(symbol)?;
        url.query_pairs_mut()
            .append_pair("symbol", symbol)
            .append_pair("type", &type_str)
            .append_pair("period1", &start_ts.to_string())
            .append_pair("period2", &end_ts.to_string());

        let (req, crumb) = client.authorized_get(url).await?;
        let resp = client.send_with_retry(req, retry_override).await?;

        if resp.status() == reqwest::StatusCode::UNAUTHORIZED && attempt == 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(symbol, "timeseries returned 401; refreshing crumb");
            client.refresh_credentials(&crumb).await?;
            continue;
        }

        let endpoint = format!("timeseries_{}_{prefix}", kind.endpoint_name());
        let body = net::get_text(resp, &endpoint, symbol).await?;
        let envelope: TimeseriesEnvelope = serde_json::from_str(&body)?;

        let node = envelope
            .timeseries
            .ok_or_else(|| DcfError::Data("timeseries node missing".into()))?;

        if let Some(err) = node.error {
            let description = err.description.unwrap_or_default();
            if attempt == 0 && description.to_ascii_lowercase().contains("invalid crumb") {
                #[cfg(feature = "tracing")]
                tracing::debug!(symbol, "invalid crumb; refreshing and retrying");
                client.refresh_credentials(&crumb).await?;
                continue;
            }
            return Err(DcfError::Api {
                code: err.code.unwrap_or_else(|| "unknown".into()),
                description,
            });
        }

        return Ok(assemble(node.result.unwrap_or_default(), prefix));
    }

    Err(DcfError::Auth(format!(
        "{} request for {symbol} rejected after crumb refresh",
        kind.endpoint_name()
    )))
}

/// Merge the per-type series of one statement into a table whose periods are
/// the union of all reported periods, most recent first.
fn assemble(items: Vec<TimeseriesData>, prefix: &str) -> StatementTable {
    let mut series: Vec<(String, BTreeMap<i64, Option<f64>>)> = Vec::new();
    let mut all_periods = BTreeSet::new();

    for item in items {
        let Some(timestamps) = item.timestamp else {
            continue;
        };
        for (key, values_json) in item.values {
            let Some(bare) = key.strip_prefix(prefix) else {
                continue;
            };
            let Ok(values) = serde_json::from_value::<Vec<Option<TimeseriesValue>>>(values_json)
            else {
                continue;
            };

            let by_period: BTreeMap<i64, Option<f64>> = timestamps
                .iter()
                .enumerate()
                .map(|(i, ts)| {
                    let value = values
                        .get(i)
                        .and_then(Option::as_ref)
                        .and_then(|v| from_raw(v.reported_value))
                        .filter(|v| v.is_finite());
                    (*ts, value)
                })
                .collect();

            all_periods.extend(by_period.keys().copied());
            series.push((title_case(bare), by_period));
        }
    }

    let periods: Vec<i64> = all_periods.into_iter().rev().collect();

    let mut table = StatementTable::new();
    for (name, by_period) in series {
        let values = periods
            .iter()
            .map(|ts| by_period.get(ts).copied().flatten())
            .collect();
        table.insert(name, values);
    }
    table.set_periods(periods.iter().filter_map(|ts| period_date(*ts)).collect());
    table
}

fn period_date(ts: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive())
}

/// `TotalLiabilitiesNetMinorityInterest` -> `Total Liabilities Net Minority Interest`.
/// Runs of capitals (`EBITDA`, `NetPPE`) are kept together.
fn title_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push(' ');
            }
        }
        out.push(c);
    }
    out
}
