//! HTTP surface for tickerview.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /api/stocks?symbol=<TICKER>` | intraday series for the ticker, `TSLA` when omitted |
//! | `GET /api/symbols` | the fixed list of offered tickers |
//! | `GET /api/tsla` | intraday series for `TSLA` |
//!
//! Every route answers 200. Whether the series came from the provider or the
//! generator is only visible in the server logs.

pub mod config;
pub mod error;
pub mod routes;

pub use config::{Cli, ServerConfig};
pub use error::{ConfigError, ServerError};
pub use routes::{app, AppState};
