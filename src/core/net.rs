use crate::core::DcfError;

/// Read the response body as text, mapping non-success statuses to
/// [`DcfError::Status`].
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _symbol: &str,
) -> Result<String, DcfError> {
    let status = resp.status();
    if !status.is_success() {
        #[cfg(feature = "tracing")]
        tracing::warn!(endpoint = _endpoint, symbol = _symbol, %status, "unsuccessful response");
        return Err(DcfError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }

    let text = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::trace!(
        endpoint = _endpoint,
        symbol = _symbol,
        bytes = text.len(),
        "response body read"
    );

    Ok(text)
}
