use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::data_source::IntradaySource;
use crate::domain::IntradaySeries;
use crate::mock::MockGenerator;
use crate::Symbol;

/// Intraday data handed back to callers.
#[derive(Debug, Clone, PartialEq)]
pub enum QuotePayload {
    /// Provider body, unchanged.
    Live(String),
    /// Generated stand-in for an unavailable provider.
    Mock(IntradaySeries),
}

impl QuotePayload {
    pub const fn is_mock(&self) -> bool {
        matches!(self, Self::Mock(_))
    }
}

/// Resolves intraday data for a symbol, falling back to generated data.
#[derive(Clone)]
pub struct QuoteFetcher {
    source: Arc<dyn IntradaySource>,
}

impl QuoteFetcher {
    pub fn new(source: Arc<dyn IntradaySource>) -> Self {
        Self { source }
    }

    /// Never fails: any source error is logged and replaced by a mock series.
    pub async fn fetch(&self, symbol: &Symbol) -> QuotePayload {
        match self.source.intraday(symbol).await {
            Ok(body) => {
                debug!(%symbol, source = self.source.id(), "serving live intraday series");
                QuotePayload::Live(body)
            }
            Err(error) => {
                warn!(
                    %symbol,
                    source = self.source.id(),
                    code = error.code(),
                    "{}; serving generated series",
                    error.message()
                );
                Self::generated(symbol.as_str())
            }
        }
    }

    /// Mock series for caller text that never reaches the provider.
    pub fn generated(label: &str) -> QuotePayload {
        let series = MockGenerator::new().generate(label.trim(), OffsetDateTime::now_utc());
        QuotePayload::Mock(series)
    }
}
