/// Sample of large S&P 500 constituents offered to clients, in display order.
const SP500_SAMPLE: [&str; 25] = [
    "AAPL", "MSFT", "AMZN", "GOOGL", "META", "TSLA", "NVDA", "JPM", "JNJ", "V", "PG", "UNH", "HD",
    "BAC", "XOM", "PFE", "CSCO", "INTC", "VZ", "DIS", "NFLX", "ADBE", "CRM", "CMCSA", "PEP",
];

pub fn sp500_symbols() -> &'static [&'static str] {
    &SP500_SAMPLE
}
