//! Synthetic intraday series used when the provider cannot serve data.
//!
//! Prices follow a bounded random walk that starts at a per-symbol base price
//! and walks backwards in time: the newest bar opens at the base price and each
//! older bar opens where the previous one closed.

use time::{Duration, OffsetDateTime, UtcOffset};

use crate::domain::{IntradayBar, IntradaySeries, SeriesMeta};

/// Bars in every generated series.
pub const BAR_COUNT: usize = 100;
/// Base price for symbols missing from the table.
pub const DEFAULT_BASE_PRICE: f64 = 100.0;
/// Volume bounds, lower inclusive and upper exclusive.
pub const VOLUME_RANGE: std::ops::Range<u64> = 100_000..2_000_000;

const STEP_MINUTES: i64 = 5;
const DEFAULT_VOLATILITY: f64 = 0.01;
const HIGH_VOLATILITY: f64 = 0.015;
const HIGH_VOLATILITY_SYMBOLS: [&str; 4] = ["TSLA", "NVDA", "AMZN", "NFLX"];
const TIME_ZONE: &str = "UTC";

const BASE_PRICES: [(&str, f64); 25] = [
    ("AAPL", 185.0),
    ("MSFT", 420.0),
    ("AMZN", 180.0),
    ("GOOGL", 150.0),
    ("META", 475.0),
    ("TSLA", 275.0),
    ("NVDA", 920.0),
    ("JPM", 200.0),
    ("JNJ", 145.0),
    ("V", 275.0),
    ("PG", 160.0),
    ("UNH", 490.0),
    ("HD", 350.0),
    ("BAC", 38.0),
    ("XOM", 115.0),
    ("PFE", 26.0),
    ("CSCO", 48.0),
    ("INTC", 42.0),
    ("VZ", 40.0),
    ("DIS", 112.0),
    ("NFLX", 625.0),
    ("ADBE", 490.0),
    ("CRM", 275.0),
    ("CMCSA", 42.0),
    ("PEP", 170.0),
];

pub fn base_price(symbol: &str) -> f64 {
    BASE_PRICES
        .iter()
        .find(|(listed, _)| *listed == symbol)
        .map_or(DEFAULT_BASE_PRICE, |(_, price)| *price)
}

pub fn volatility(symbol: &str) -> f64 {
    if HIGH_VOLATILITY_SYMBOLS.contains(&symbol) {
        HIGH_VOLATILITY
    } else {
        DEFAULT_VOLATILITY
    }
}

/// Random-walk generator for provider-shaped intraday series.
#[derive(Debug)]
pub struct MockGenerator {
    rng: fastrand::Rng,
}

impl MockGenerator {
    /// Generator seeded from entropy.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Generator with reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Builds [`BAR_COUNT`] bars ending at `now`, newest first, 5 minutes apart.
    ///
    /// `symbol` is used as given for the table lookups and the metadata label.
    pub fn generate(&mut self, symbol: &str, now: OffsetDateTime) -> IntradaySeries {
        let now = now.to_offset(UtcOffset::UTC);
        let volatility = volatility(symbol);
        let step = Duration::minutes(STEP_MINUTES);

        let mut price = base_price(symbol);
        let mut ts = now;
        let mut bars = Vec::with_capacity(BAR_COUNT);

        for _ in 0..BAR_COUNT {
            let bar = self.next_bar(ts, price, volatility);
            price = bar.close;
            ts -= step;
            bars.push(bar);
        }

        IntradaySeries {
            meta: SeriesMeta {
                symbol: symbol.to_owned(),
                last_refreshed: now,
                time_zone: String::from(TIME_ZONE),
            },
            bars,
        }
    }

    fn next_bar(&mut self, ts: OffsetDateTime, open: f64, volatility: f64) -> IntradayBar {
        let high_low_range = open * volatility * 2.0;
        let change = (self.rng.f64() * 2.0 - 1.0) * volatility;
        let close = open * (1.0 + change);

        IntradayBar {
            ts,
            open,
            high: open.max(close) + self.rng.f64() * high_low_range / 2.0,
            low: open.min(close) - self.rng.f64() * high_low_range / 2.0,
            close,
            volume: self.rng.u64(VOLUME_RANGE),
        }
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_SYMBOL;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2025-01-14 16:00:00 UTC);

    #[test]
    fn generates_exactly_one_hundred_bars() {
        let series = MockGenerator::with_seed(7).generate("AAPL", NOW);
        assert_eq!(series.bars.len(), BAR_COUNT);
    }

    #[test]
    fn timestamps_step_back_five_minutes_from_now() {
        let series = MockGenerator::with_seed(7).generate("MSFT", NOW);

        assert_eq!(series.bars[0].ts, NOW);
        for pair in series.bars.windows(2) {
            assert_eq!(pair[0].ts - pair[1].ts, Duration::minutes(5));
        }
        assert_eq!(series.bars[BAR_COUNT - 1].ts, NOW - Duration::minutes(5 * 99));
    }

    #[test]
    fn bars_respect_ohlc_bounds_and_volume_range() {
        for seed in 0..50 {
            let series = MockGenerator::with_seed(seed).generate("NVDA", NOW);
            for bar in &series.bars {
                assert!(bar.low <= bar.open.min(bar.close), "seed {seed}: {bar:?}");
                assert!(bar.high >= bar.open.max(bar.close), "seed {seed}: {bar:?}");
                assert!(VOLUME_RANGE.contains(&bar.volume), "seed {seed}: {bar:?}");
            }
        }
    }

    #[test]
    fn each_bar_opens_at_previous_close() {
        let series = MockGenerator::with_seed(11).generate("PEP", NOW);

        assert_eq!(series.bars[0].open, 170.0);
        for pair in series.bars.windows(2) {
            assert_eq!(pair[1].open, pair[0].close);
        }
    }

    #[test]
    fn close_moves_within_volatility_band() {
        let series = MockGenerator::with_seed(3).generate("JPM", NOW);
        for bar in &series.bars {
            let change = (bar.close - bar.open).abs() / bar.open;
            assert!(change <= DEFAULT_VOLATILITY + 1e-12, "{bar:?}");
            assert!(bar.high - bar.open.max(bar.close) <= bar.open * DEFAULT_VOLATILITY + 1e-9);
        }
    }

    #[test]
    fn unlisted_symbol_starts_at_default_base_price() {
        let series = MockGenerator::with_seed(5).generate("ZZZZ", NOW);
        assert_eq!(series.symbol(), "ZZZZ");
        assert_eq!(series.bars[0].open, DEFAULT_BASE_PRICE);
    }

    #[test]
    fn default_symbol_generates_tsla_series() {
        let series = MockGenerator::with_seed(5).generate(DEFAULT_SYMBOL, NOW);
        assert_eq!(series.symbol(), "TSLA");
        assert_eq!(series.bars[0].open, 275.0);
    }

    #[test]
    fn same_seed_reproduces_series() {
        let first = MockGenerator::with_seed(42).generate("AAPL", NOW);
        let second = MockGenerator::with_seed(42).generate("AAPL", NOW);
        assert_eq!(first, second);
    }

    #[test]
    fn metadata_is_labeled_in_utc() {
        let local = datetime!(2025-01-14 11:00:00 -5);
        let series = MockGenerator::with_seed(1).generate("AAPL", local);
        assert_eq!(series.meta.last_refreshed, NOW);
        assert_eq!(series.meta.time_zone, "UTC");
    }

    #[test]
    fn volatility_table_matches_high_volatility_names() {
        assert_eq!(volatility("TSLA"), HIGH_VOLATILITY);
        assert_eq!(volatility("NFLX"), HIGH_VOLATILITY);
        assert_eq!(volatility("AAPL"), DEFAULT_VOLATILITY);
        assert_eq!(volatility("UNKNOWN"), DEFAULT_VOLATILITY);
    }

    #[test]
    fn base_price_table_covers_listed_symbols() {
        assert_eq!(base_price("NVDA"), 920.0);
        assert_eq!(base_price("PFE"), 26.0);
        assert_eq!(base_price("aapl"), DEFAULT_BASE_PRICE);
    }
}
