use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// Top-level key holding the series metadata block.
pub const META_DATA_KEY: &str = "Meta Data";
/// Top-level key holding the 5-minute bars.
pub const SERIES_KEY: &str = "Time Series (5min)";
/// Interval label used in requests and metadata.
pub const INTERVAL: &str = "5min";

const INFORMATION: &str = "Intraday (5min) open high low close prices and volume";
const OUTPUT_SIZE: &str = "Compact";

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Formats a timestamp the way the provider keys its series.
pub fn format_timestamp(ts: OffsetDateTime) -> Result<String, time::error::Format> {
    ts.format(TIMESTAMP_FORMAT)
}

/// One OHLCV record for a single 5-minute interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntradayBar {
    pub ts: OffsetDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Metadata block describing an intraday series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesMeta {
    pub symbol: String,
    pub last_refreshed: OffsetDateTime,
    pub time_zone: String,
}

/// Intraday series in the provider's response layout.
///
/// Bars are kept newest first and serialize in that order, so the JSON object
/// reads the same as a provider response.
#[derive(Debug, Clone, PartialEq)]
pub struct IntradaySeries {
    pub meta: SeriesMeta,
    pub bars: Vec<IntradayBar>,
}

impl IntradaySeries {
    pub fn symbol(&self) -> &str {
        &self.meta.symbol
    }
}

#[derive(Serialize)]
struct MetaFields<'a> {
    #[serde(rename = "1. Information")]
    information: &'static str,
    #[serde(rename = "2. Symbol")]
    symbol: &'a str,
    #[serde(rename = "3. Last Refreshed")]
    last_refreshed: String,
    #[serde(rename = "4. Interval")]
    interval: &'static str,
    #[serde(rename = "5. Output Size")]
    output_size: &'static str,
    #[serde(rename = "6. Time Zone")]
    time_zone: &'a str,
}

#[derive(Serialize)]
struct BarFields {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume")]
    volume: String,
}

impl From<&IntradayBar> for BarFields {
    fn from(bar: &IntradayBar) -> Self {
        Self {
            open: format!("{:.4}", bar.open),
            high: format!("{:.4}", bar.high),
            low: format!("{:.4}", bar.low),
            close: format!("{:.4}", bar.close),
            volume: bar.volume.to_string(),
        }
    }
}

struct BarsInOrder<'a>(&'a [IntradayBar]);

impl Serialize for BarsInOrder<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for bar in self.0 {
            let key = format_timestamp(bar.ts).map_err(S::Error::custom)?;
            map.serialize_entry(&key, &BarFields::from(bar))?;
        }
        map.end()
    }
}

impl Serialize for IntradaySeries {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let last_refreshed =
            format_timestamp(self.meta.last_refreshed).map_err(S::Error::custom)?;
        let meta = MetaFields {
            information: INFORMATION,
            symbol: &self.meta.symbol,
            last_refreshed,
            interval: INTERVAL,
            output_size: OUTPUT_SIZE,
            time_zone: &self.meta.time_zone,
        };

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(META_DATA_KEY, &meta)?;
        map.serialize_entry(SERIES_KEY, &BarsInOrder(&self.bars))?;
        map.end()
    }
}
