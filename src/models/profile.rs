use rand::Rng;

/// Price characteristics used to synthesize plausible data for a ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerProfile {
    pub symbol: String,
    pub display_name: String,
    pub base_price: f64,
    pub volatility: f64,
}

/// Reference profiles for well-known tickers.
const KNOWN_PROFILES: &[(&str, &str, f64, f64)] = &[
    ("AAPL", "Apple Inc.", 150.0, 0.02),
    ("MSFT", "Microsoft Corp.", 330.0, 0.015),
    ("GOOGL", "Alphabet Inc.", 140.0, 0.025),
    ("TSLA", "Tesla Inc.", 250.0, 0.03),
    ("RELIANCE.NS", "Reliance Industries Ltd.", 2500.0, 0.02),
    ("TCS.NS", "Tata Consultancy Services Ltd.", 3800.0, 0.018),
    ("INFY.NS", "Infosys Ltd.", 1450.0, 0.022),
];

impl TickerProfile {
    /// Resolve a profile for `symbol`, synthesizing bounded-random
    /// characteristics for tickers outside the reference table.
    pub fn resolve(symbol: &str, rng: &mut impl Rng) -> Self {
        let upper = symbol.to_uppercase();
        for (sym, name, base_price, volatility) in KNOWN_PROFILES {
            if *sym == upper {
                return Self {
                    symbol: upper,
                    display_name: (*name).to_string(),
                    base_price: *base_price,
                    volatility: *volatility,
                };
            }
        }

        Self {
            display_name: format!("{} Corp.", upper),
            symbol: upper,
            base_price: rng.gen_range(50.0..500.0),
            volatility: rng.gen_range(0.01..0.04),
        }
    }

    pub fn is_known(symbol: &str) -> bool {
        let upper = symbol.to_uppercase();
        KNOWN_PROFILES.iter().any(|(sym, ..)| *sym == upper)
    }
}
