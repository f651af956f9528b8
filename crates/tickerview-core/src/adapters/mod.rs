//! Upstream quote provider adapters.

pub mod alphavantage;

pub use alphavantage::{AlphaVantageAdapter, DEFAULT_BASE_URL};
