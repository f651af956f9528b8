//! # Tickerview Core
//!
//! Domain types and data paths behind the tickerview intraday API.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Alpha Vantage intraday client |
//! | [`data_source`] | Intraday source trait and source errors |
//! | [`domain`] | Symbol and intraday series models |
//! | [`error`] | Validation errors |
//! | [`fetcher`] | Live-or-mock quote resolution |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`mock`] | Random-walk series generator |
//! | [`symbols`] | Fixed list of offered tickers |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  HTTP handler   │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐  error  ┌──────────────────┐
//! │  QuoteFetcher   │───────▶│  MockGenerator   │
//! └────────┬────────┘         └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ IntradaySource  │────▶│ HTTP Client      │
//! │ (Alpha Vantage) │     │ (reqwest)        │
//! └─────────────────┘     └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickerview_core::{AlphaVantageAdapter, QuoteFetcher, ReqwestHttpClient, Symbol};
//!
//! let adapter = AlphaVantageAdapter::new(Arc::new(ReqwestHttpClient::new()), Some(key));
//! let fetcher = QuoteFetcher::new(Arc::new(adapter));
//! let payload = fetcher.fetch(&Symbol::parse("AAPL")?).await;
//! ```
//!
//! ## Error Handling
//!
//! Provider failures never escape [`QuoteFetcher::fetch`]. Transport errors,
//! non-2xx statuses, malformed bodies, throttling notices, and empty series
//! all surface as a [`SourceError`] inside the adapter, get logged, and are
//! replaced by a generated series.
//!
//! ## Security
//!
//! - The API key is read from configuration only and never logged
//! - Transport errors are stripped of the request URL, which carries the key
//! - Symbols are validated and percent-encoded before reaching the provider

pub mod adapters;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod mock;
pub mod symbols;

pub use adapters::AlphaVantageAdapter;

pub use data_source::{IntradaySource, SourceError, SourceErrorKind};

pub use domain::{IntradayBar, IntradaySeries, SeriesMeta, Symbol, DEFAULT_SYMBOL};

pub use error::ValidationError;

pub use fetcher::{QuoteFetcher, QuotePayload};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use mock::MockGenerator;

pub use symbols::sp500_symbols;
