//! Yahoo session: the consent cookie and the crumb every timeseries request
//! must carry.

use reqwest::RequestBuilder;
use reqwest::header::{COOKIE, SET_COOKIE};
use url::Url;

use super::{Session, YahooClient};
use crate::core::error::DcfError;

impl YahooClient {
    /// A GET to `url` with the session crumb appended and the session cookie
    /// attached, starting a session first if none is cached.
    ///
    /// The crumb used is returned so a rejection can be passed to
    /// [`YahooClient::refresh_credentials`].
    pub(crate) async fn authorized_get(
        &self,
        mut url: Url,
    ) -> Result<(RequestBuilder, String), DcfError> {
        let session = self.session().await?;
        url.query_pairs_mut().append_pair("crumb", &session.crumb);

        let mut req = self.http.get(url);
        if let Some(cookie) = session.cookie {
            req = req.header(COOKIE, cookie);
        }
        Ok((req, session.crumb))
    }

    /// Forget the session if it still holds `rejected`, then start a new one.
    ///
    /// Tasks that were rejected with the same crumb share one refresh: the
    /// first clears and refetches, the rest find a newer crumb and keep it.
    pub(crate) async fn refresh_credentials(&self, rejected: &str) -> Result<(), DcfError> {
        {
            let _guard = self.credential_fetch_lock.lock().await;
            let mut state = self.state.write().await;
            if state.session.as_ref().is_some_and(|s| s.crumb == rejected) {
                #[cfg(feature = "tracing")]
                tracing::debug!("discarding rejected crumb");
                state.session = None;
            }
        }
        self.session().await.map(drop)
    }

    async fn session(&self) -> Result<Session, DcfError> {
        if let Some(session) = self.state.read().await.session.clone() {
            return Ok(session);
        }

        let _guard = self.credential_fetch_lock.lock().await;
        if let Some(session) = self.state.read().await.session.clone() {
            return Ok(session);
        }

        let session = self.start_session().await?;
        self.state.write().await.session = Some(session.clone());
        Ok(session)
    }

    async fn start_session(&self) -> Result<Session, DcfError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(consent = %self.cookie_url, "starting Yahoo session");

        let resp = self
            .send_with_retry(self.http.get(self.cookie_url.clone()), None)
            .await?;
        // Only the `name=value` pair; attributes are for the browser.
        let cookie = resp
            .headers()
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|pair| pair.trim().to_string())
            .filter(|pair| !pair.is_empty())
            .ok_or_else(|| {
                DcfError::Auth(format!("{} did not set a consent cookie", self.cookie_url))
            })?;

        let resp = self
            .send_with_retry(self.http.get(self.crumb_url.clone()), None)
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        let crumb = body.trim();

        if !status.is_success() || crumb.is_empty() || crumb.contains(['{', '<']) {
            return Err(DcfError::Auth(format!(
                "{} answered {status} without a usable crumb",
                self.crumb_url
            )));
        }

        Ok(Session {
            cookie: Some(cookie),
            crumb: crumb.to_string(),
        })
    }
}
