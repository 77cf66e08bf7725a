#![allow(dead_code)]

use dcf_valuation::{RetryConfig, StatementKind, YahooClient};
use httpmock::{Method::GET, Mock, MockServer};
use serde_json::{Value, json};
use url::Url;

pub const TIMESERIES_PATH: &str = "/ws/fundamentals-timeseries/v1/finance/timeseries/";

// 2021-09-30, 2022-09-30, 2023-09-30 (UTC midnight)
pub const TS_2021: i64 = 1_632_960_000;
pub const TS_2022: i64 = 1_664_496_000;
pub const TS_2023: i64 = 1_696_032_000;

/// One requested series: provider key without prefix, ascending timestamps,
/// values aligned to them (`None` -> JSON null entry).
pub struct Series<'a> {
    pub key: &'a str,
    pub timestamps: &'a [i64],
    pub values: &'a [Option<f64>],
}

pub fn series<'a>(key: &'a str, timestamps: &'a [i64], values: &'a [Option<f64>]) -> Series<'a> {
    Series {
        key,
        timestamps,
        values,
    }
}

/// Timeseries envelope the way Yahoo shapes it: one result item per type,
/// values listed oldest first.
pub fn timeseries_body(prefix: &str, items: &[Series<'_>]) -> String {
    let result: Vec<Value> = items
        .iter()
        .map(|s| {
            let type_name = format!("{prefix}{}", s.key);
            let values: Vec<Value> = s
                .values
                .iter()
                .map(|v| match v {
                    Some(raw) => json!({
                        "asOfDate": "2023-09-30",
                        "periodType": "12M",
                        "currencyCode": "USD",
                        "reportedValue": { "raw": raw, "fmt": format!("{raw}") }
                    }),
                    None => Value::Null,
                })
                .collect();
            let mut item = json!({
                "meta": { "symbol": ["TEST"], "type": [type_name.clone()] },
                "timestamp": s.timestamps,
            });
            item[type_name] = Value::Array(values);
            item
        })
        .collect();

    json!({ "timeseries": { "result": result, "error": null } }).to_string()
}

pub fn type_param(kind: StatementKind, prefix: &str) -> String {
    kind.provider_keys()
        .iter()
        .map(|k| format!("{prefix}{k}"))
        .collect::<Vec<_>>()
        .join(",")
}

pub async fn mock_statement<'a>(
    server: &'a MockServer,
    symbol: &str,
    kind: StatementKind,
    crumb: &str,
    body: String,
) -> Mock<'a> {
    let path = format!("{TIMESERIES_PATH}{symbol}");
    let types = type_param(kind, "annual");
    let crumb = crumb.to_string();
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(path)
                .query_param("type", types)
                .query_param("crumb", crumb);
            then.status(200)
                .header("content-type", "application/json")
                .body(body);
        })
        .await
}

pub async fn mock_cookie_crumb<'a>(server: &'a MockServer, crumb: &str) -> (Mock<'a>, Mock<'a>) {
    let cookie_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/consent");
            then.status(200).header(
                "set-cookie",
                "A=B; Max-Age=315360000; Domain=.yahoo.com; Path=/; Secure; SameSite=None",
            );
        })
        .await;
    let crumb = crumb.to_string();
    let crumb_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/test/getcrumb");
            then.status(200).body(crumb);
        })
        .await;
    (cookie_mock, crumb_mock)
}

/// Client pointed at the mock server, pre-authenticated with `crumb`,
/// retries disabled.
pub fn client_for(server: &MockServer, crumb: &str) -> YahooClient {
    YahooClient::builder()
        .base_timeseries(Url::parse(&server.url(TIMESERIES_PATH)).unwrap())
        .cookie_url(Url::parse(&server.url("/consent")).unwrap())
        .crumb_url(Url::parse(&server.url("/v1/test/getcrumb")).unwrap())
        .preauth("cookie", crumb)
        .retry_config(RetryConfig::disabled())
        .build()
        .unwrap()
}

/// Client pointed at the mock server with no session yet, retries disabled.
pub fn unauthenticated_client_for(server: &MockServer) -> YahooClient {
    YahooClient::builder()
        .base_timeseries(Url::parse(&server.url(TIMESERIES_PATH)).unwrap())
        .cookie_url(Url::parse(&server.url("/consent")).unwrap())
        .crumb_url(Url::parse(&server.url("/v1/test/getcrumb")).unwrap())
        .retry_config(RetryConfig::disabled())
        .build()
        .unwrap()
}

/// Mock all three statements of the worked example:
/// revenue 100 -> 110 -> 121, assets 500, liabilities 300,
/// net income 50, depreciation 10, change in WC 5, capex 20.
pub async fn mock_example_company<'a>(server: &'a MockServer, symbol: &str) -> [Mock<'a>; 3] {
    let three = [TS_2021, TS_2022, TS_2023];
    let one = [TS_2023];

    let income = timeseries_body(
        "annual",
        &[
            series("TotalRevenue", &three, &[Some(121.0), Some(110.0), Some(100.0)]),
            series("OperatingIncome", &three, &[Some(24.2), Some(22.0), Some(20.0)]),
        ],
    );
    let balance = timeseries_body(
        "annual",
        &[
            series("TotalAssets", &one, &[Some(500.0)]),
            series("TotalLiabilitiesNetMinorityInterest", &one, &[Some(300.0)]),
        ],
    );
    let cash = timeseries_body(
        "annual",
        &[
            series("NetIncome", &one, &[Some(50.0)]),
            series("Depreciation", &one, &[Some(10.0)]),
            series("ChangeInWorkingCapital", &one, &[Some(5.0)]),
            series("CapitalExpenditure", &one, &[Some(20.0)]),
        ],
    );

    [
        mock_statement(server, symbol, StatementKind::Income, "crumb", income).await,
        mock_statement(server, symbol, StatementKind::BalanceSheet, "crumb", balance).await,
        mock_statement(server, symbol, StatementKind::CashFlow, "crumb", cash).await,
    ]
}

pub fn approx(actual: f64, expected: f64, tol: f64) -> bool {
    (actual - expected).abs() <= tol
}
