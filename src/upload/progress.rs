use rand::Rng;

use crate::utils::timer::Ticker;

const TICK_SECS: f64 = 0.1;
const STEP_MAX: f32 = 15.0;

/// Where the synthetic value stops. Real completion comes from the server
/// response, so the bar must never claim it on its own.
pub const CLAMP_PERCENT: f32 = 90.0;

/// Fabricated upload progress shown while the request is in flight. The value
/// is unrelated to bytes transferred; it only tells the user the app is busy.
#[derive(Debug, Clone)]
pub struct SyntheticProgress {
    percent: f32,
    ticker: Option<Ticker>,
}

impl SyntheticProgress {
    pub fn start(now: f64) -> Self {
        Self {
            percent: 0.0,
            ticker: Some(Ticker::new(now, TICK_SECS)),
        }
    }

    /// Advances by a random amount per elapsed tick. Once the clamp is
    /// reached the ticker is dropped and the value stays put.
    pub fn advance(&mut self, now: f64, rng: &mut impl Rng) {
        let mut clamped = false;
        if let Some(ticker) = self.ticker.as_mut() {
            while ticker.fired(now) {
                self.percent += rng.gen_range(0.0..STEP_MAX);
                if self.percent >= CLAMP_PERCENT {
                    self.percent = CLAMP_PERCENT;
                    clamped = true;
                    break;
                }
            }
        }
        if clamped {
            self.ticker = None;
        }
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }
}
