//! Synthetic OHLCV generation for when real data cannot be obtained
//!
//! The generated series mixes a small linear drift, a one-trading-year
//! seasonal cycle and a Gaussian daily term, clamped to a band around the
//! profile's base price, so it looks statistically like real market data.

use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::sync::Mutex;
use tracing::info;

use crate::models::{PriceBar, PriceSeries, TickerProfile};

const DAILY_DRIFT: f64 = 0.0005;
const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Generates a statistically plausible daily series for any ticker.
///
/// Randomized by construction; `with_seed` pins the random source for
/// reproducible tests.
pub struct SyntheticSeriesGenerator {
    rng: Mutex<StdRng>,
}

impl SyntheticSeriesGenerator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Produce a business-day OHLCV series covering the last `days_back`
    /// calendar days. Never fails.
    pub fn generate(&self, ticker: &str, days_back: u32) -> PriceSeries {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let profile = TickerProfile::resolve(ticker, &mut *rng);

        let dates = business_days(days_back);
        let closes = close_walk(&profile, dates.len(), &mut *rng);
        let bars = bars_from_closes(&profile, &dates, &closes, &mut *rng);

        info!(
            ticker = %profile.symbol,
            bars = bars.len(),
            base_price = profile.base_price,
            "generated synthetic series"
        );
        PriceSeries::new(profile.symbol, bars)
    }
}

impl Default for SyntheticSeriesGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Monday-Friday calendar days in `[today - days_back, today]`.
fn business_days(days_back: u32) -> Vec<NaiveDate> {
    let end = Utc::now().date_naive();
    let start = end - Duration::days(days_back as i64);

    let mut dates = Vec::new();
    let mut day = start;
    while day <= end {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            dates.push(day);
        }
        day += Duration::days(1);
    }
    dates
}

/// Random walk of close prices with drift, seasonality and a clamp to
/// `[0.5 * base, 2.0 * base]`.
fn close_walk(profile: &TickerProfile, total_days: usize, rng: &mut StdRng) -> Vec<f64> {
    let mut closes = Vec::with_capacity(total_days);
    let mut price = profile.base_price;
    let floor = profile.base_price * 0.5;
    let ceiling = profile.base_price * 2.0;

    for i in 0..total_days {
        let trend = 1.0 + (i as f64 / total_days as f64) * 0.02;
        let seasonal =
            1.0 + 0.01 * (2.0 * std::f64::consts::PI * i as f64 / TRADING_DAYS_PER_YEAR).sin();
        let z: f64 = rng.sample(StandardNormal);
        let daily_change = DAILY_DRIFT + profile.volatility * z;

        price *= (1.0 + daily_change) * trend * seasonal;
        price = price.clamp(floor, ceiling);
        closes.push(price);
    }
    closes
}

/// Derive open/high/low/volume per day from the close walk.
fn bars_from_closes(
    profile: &TickerProfile,
    dates: &[NaiveDate],
    closes: &[f64],
    rng: &mut StdRng,
) -> Vec<PriceBar> {
    let mut bars = Vec::with_capacity(dates.len());

    for (i, (&date, &close)) in dates.iter().zip(closes.iter()).enumerate() {
        // Open gaps off the previous close; day zero gaps off its own close.
        let reference = if i == 0 { close } else { closes[i - 1] };
        let gap: f64 = rng.sample::<f64, _>(StandardNormal) * profile.volatility * 0.5;
        let open = reference * (1.0 + gap);

        let intraday_range = close * profile.volatility * rng.gen_range(0.5..2.0);
        let high = open.max(close) + intraday_range * 0.5;
        let low = open.min(close) - intraday_range * 0.5;

        let avg_volume = rng.gen_range(10_000_000.0..100_000_000.0);
        let lognormal = (0.5 * rng.sample::<f64, _>(StandardNormal)).exp();
        let volume = (avg_volume * lognormal) as u64;

        bars.push(PriceBar::new(date, open, high, low, close, volume));
    }
    bars
}
