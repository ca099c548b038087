//! Fixed-window call budget for the market data source

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::debug;

const WINDOW: Duration = Duration::from_secs(60);

#[derive(Debug)]
struct RateWindow {
    window_start: Instant,
    calls_in_window: u32,
}

/// Process-wide rate limiter: at most `max_calls_per_window` acquisitions
/// per rolling one-minute window.
///
/// The window state is shared by every concurrent prediction request, so it
/// lives behind a mutex; the lock is held across the wait, which serializes
/// callers and keeps the budget exact under bursts.
#[derive(Debug)]
pub struct RateLimiter {
    max_calls_per_window: u32,
    window: Mutex<RateWindow>,
}

impl RateLimiter {
    pub fn new(max_calls_per_window: u32) -> Self {
        Self {
            max_calls_per_window,
            window: Mutex::new(RateWindow {
                window_start: Instant::now(),
                calls_in_window: 0,
            }),
        }
    }

    /// Block until a call slot is available, then reserve it.
    pub async fn acquire(&self) {
        let mut window = self.window.lock().await;
        let now = Instant::now();

        if now.duration_since(window.window_start) > WINDOW {
            window.calls_in_window = 0;
            window.window_start = now;
        }

        if window.calls_in_window >= self.max_calls_per_window {
            let elapsed = now.duration_since(window.window_start);
            if elapsed < WINDOW {
                let wait = WINDOW - elapsed;
                debug!(
                    wait_secs = wait.as_secs_f64(),
                    "rate limit window exhausted, waiting"
                );
                sleep(wait).await;
            }
            window.calls_in_window = 0;
        }

        window.calls_in_window += 1;
        window.window_start = Instant::now();
    }
}
