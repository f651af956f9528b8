//! # Domain Models
//!
//! Types shared by the provider client, the mock generator, and the web layer.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated, uppercased ticker |
//! | [`IntradayBar`] | OHLCV record for one 5-minute interval |
//! | [`IntradaySeries`] | Metadata plus bars, serialized in the provider's layout |
//!
//! The serialized form of [`IntradaySeries`] mirrors the provider's intraday
//! response exactly: ordinal-prefixed field labels (`"1. open"`), prices as
//! strings with four fractional digits, and bars keyed newest first.

mod intraday;
mod symbol;

pub use intraday::{
    format_timestamp, IntradayBar, IntradaySeries, SeriesMeta, INTERVAL, META_DATA_KEY,
    SERIES_KEY,
};
pub use symbol::{Symbol, DEFAULT_SYMBOL};
