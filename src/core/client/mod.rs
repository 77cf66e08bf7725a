//! Public client surface + builder.
//! Internals are split into `auth` (session cookie/crumb), `retry` (backoff policy)
//! and `constants` (UA + defaults).

mod auth;
mod constants;
pub mod retry;

pub use retry::{Backoff, RetryConfig};

use crate::core::DcfError;
use constants::{DEFAULT_BASE_TIMESERIES, DEFAULT_COOKIE_URL, DEFAULT_CRUMB_URL, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use url::Url;

#[derive(Debug, Clone)]
struct Session {
    cookie: Option<String>,
    crumb: String,
}

#[derive(Debug, Default)]
struct ClientState {
    session: Option<Session>,
}

/// Configured HTTP client for the Yahoo Finance endpoints used by this crate.
///
/// Cloning is cheap; clones share one Yahoo session, so the cookie and crumb
/// are fetched once per process no matter how many tasks hold a client.
#[derive(Debug, Clone)]
pub struct YahooClient {
    http: Client,
    base_timeseries: Url,
    cookie_url: Url,
    crumb_url: Url,

    state: Arc<RwLock<ClientState>>,
    credential_fetch_lock: Arc<Mutex<()>>,

    retry: RetryConfig,
}

impl YahooClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> YahooClientBuilder {
        YahooClientBuilder::default()
    }

    /// Build a client with every setting at its default.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying HTTP client cannot be constructed
    /// (e.g. the TLS backend fails to initialize).
    pub fn new() -> Result<Self, DcfError> {
        Self::builder().build()
    }

    /// The retry policy applied when a call does not override it.
    #[must_use]
    pub const fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) const fn base_timeseries(&self) -> &Url {
        &self.base_timeseries
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct YahooClientBuilder {
    user_agent: Option<String>,
    base_timeseries: Option<Url>,
    cookie_url: Option<Url>,
    crumb_url: Option<Url>,

    #[cfg(feature = "test-mode")]
    preauth_cookie: Option<String>,
    #[cfg(feature = "test-mode")]
    preauth_crumb: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl YahooClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the fundamentals-timeseries API base
    /// (e.g., `https://query2.finance.yahoo.com/ws/fundamentals-timeseries/v1/finance/timeseries/`).
    #[must_use]
    pub fn base_timeseries(mut self, url: Url) -> Self {
        self.base_timeseries = Some(url);
        self
    }

    /// Override the cookie bootstrap URL.
    #[must_use]
    pub fn cookie_url(mut self, url: Url) -> Self {
        self.cookie_url = Some(url);
        self
    }

    /// Override the crumb URL.
    #[must_use]
    pub fn crumb_url(mut self, url: Url) -> Self {
        self.crumb_url = Some(url);
        self
    }

    #[cfg(feature = "test-mode")]
    /// Provide pre-auth credentials (bypass cookie/crumb fetch) in tests.
    #[must_use]
    pub fn preauth(mut self, cookie: impl Into<String>, crumb: impl Into<String>) -> Self {
        self.preauth_cookie = Some(cookie.into());
        self.preauth_crumb = Some(crumb.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Set the default retry policy for every request made by the client.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Finish the builder.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse or the HTTP client
    /// cannot be built.
    pub fn build(self) -> Result<YahooClient, DcfError> {
        let base_timeseries = match self.base_timeseries {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_TIMESERIES)?,
        };
        let cookie_url = match self.cookie_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_COOKIE_URL)?,
        };
        let crumb_url = match self.crumb_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_CRUMB_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        #[cfg(feature = "test-mode")]
        let state = ClientState {
            session: self.preauth_crumb.map(|crumb| Session {
                cookie: self.preauth_cookie,
                crumb,
            }),
        };
        #[cfg(not(feature = "test-mode"))]
        let state = ClientState::default();

        Ok(YahooClient {
            http,
            base_timeseries,
            cookie_url,
            crumb_url,
            state: Arc::new(RwLock::new(state)),
            credential_fetch_lock: Arc::new(Mutex::new(())),
            retry: self.retry.unwrap_or_default(),
        })
    }
}
