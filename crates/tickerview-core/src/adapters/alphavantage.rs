use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::data_source::{IntradaySource, SourceError};
use crate::domain::{INTERVAL, SERIES_KEY};
use crate::http_client::{HttpClient, HttpRequest};
use crate::Symbol;

/// Public Alpha Vantage endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// Alpha Vantage intraday client.
///
/// Issues a single `TIME_SERIES_INTRADAY` call per request and accepts the
/// response only when it carries a non-empty 5-minute series.
#[derive(Clone)]
pub struct AlphaVantageAdapter {
    http_client: Arc<dyn HttpClient>,
    api_key: Option<String>,
    base_url: String,
}

impl AlphaVantageAdapter {
    /// A blank `api_key` counts as missing.
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: Option<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    fn intraday_url(&self, symbol: &Symbol, api_key: &str) -> String {
        format!(
            "{}/query?function=TIME_SERIES_INTRADAY&symbol={}&interval={}&apikey={}",
            self.base_url,
            urlencoding::encode(symbol.as_str()),
            INTERVAL,
            urlencoding::encode(api_key)
        )
    }

    async fn fetch_intraday(&self, symbol: &Symbol) -> Result<String, SourceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SourceError::unavailable("alphavantage api key is not configured"))?;

        let request = HttpRequest::get(self.intraday_url(symbol, api_key))
            .with_header("accept", "application/json");

        let response = self.http_client.execute(request).await.map_err(|e| {
            SourceError::unavailable(format!("alphavantage transport error: {}", e.message()))
        })?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "alphavantage returned status {}",
                response.status
            )));
        }

        let parsed: Value = serde_json::from_str(&response.body).map_err(|e| {
            SourceError::internal(format!("failed to parse alphavantage response: {}", e))
        })?;
        ensure_series(&parsed)?;

        Ok(response.body)
    }
}

impl IntradaySource for AlphaVantageAdapter {
    fn id(&self) -> &'static str {
        "alphavantage"
    }

    fn intraday<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<String, SourceError>> + Send + 'a>> {
        Box::pin(self.fetch_intraday(symbol))
    }
}

/// Accepts a body only if its series key maps to a non-empty object.
///
/// Alpha Vantage answers throttled calls with HTTP 200 and a `Note` or
/// `Information` message in place of the series, and bad symbols with an
/// `Error Message`.
fn ensure_series(body: &Value) -> Result<(), SourceError> {
    match body.get(SERIES_KEY) {
        Some(Value::Object(series)) if !series.is_empty() => Ok(()),
        Some(Value::Object(_)) => Err(SourceError::unavailable(
            "alphavantage returned an empty intraday series",
        )),
        _ => Err(missing_series_error(body)),
    }
}

fn missing_series_error(body: &Value) -> SourceError {
    let notice = body
        .get("Note")
        .or_else(|| body.get("Information"))
        .and_then(Value::as_str);
    if let Some(notice) = notice {
        return SourceError::rate_limited(format!("alphavantage throttled request: {notice}"));
    }

    if let Some(message) = body.get("Error Message").and_then(Value::as_str) {
        return SourceError::unavailable(format!("alphavantage rejected request: {message}"));
    }

    SourceError::unavailable("no intraday series in alphavantage response")
}
