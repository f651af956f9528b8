use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tickerview_core::{
    sp500_symbols, AlphaVantageAdapter, HttpClient, QuoteFetcher, QuotePayload,
    ReqwestHttpClient, Symbol,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    fetcher: Arc<QuoteFetcher>,
}

impl AppState {
    pub fn new(fetcher: QuoteFetcher) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
        }
    }

    /// Wires the Alpha Vantage adapter over the given transport.
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: &ServerConfig) -> Self {
        let adapter = AlphaVantageAdapter::new(http_client, config.api_key.clone())
            .with_base_url(config.provider_url.clone());
        Self::new(QuoteFetcher::new(Arc::new(adapter)))
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), config)
    }
}

#[derive(Debug, Deserialize)]
pub struct StocksQuery {
    pub symbol: Option<String>,
}

/// Builds the API router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/stocks", get(stocks))
        .route("/api/symbols", get(symbols))
        .route("/api/tsla", get(tsla))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn stocks(State(state): State<AppState>, query: Option<Query<StocksQuery>>) -> Response {
    let requested = query
        .and_then(|Query(params)| params.symbol)
        .filter(|raw| !raw.trim().is_empty());

    let payload = match requested {
        None => state.fetcher.fetch(&Symbol::default()).await,
        Some(raw) => match Symbol::parse(&raw) {
            Ok(symbol) => state.fetcher.fetch(&symbol).await,
            Err(error) => {
                warn!(requested = %raw, %error, "rejected symbol; serving generated series");
                QuoteFetcher::generated(&raw)
            }
        },
    };

    payload_response(payload)
}

async fn symbols() -> Json<&'static [&'static str]> {
    Json(sp500_symbols())
}

async fn tsla(State(state): State<AppState>) -> Response {
    payload_response(state.fetcher.fetch(&Symbol::default()).await)
}

fn payload_response(payload: QuotePayload) -> Response {
    match payload {
        QuotePayload::Live(body) => {
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        QuotePayload::Mock(series) => Json(series).into_response(),
    }
}
