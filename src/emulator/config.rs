use std::time::Duration;

/// Pause after each draw, approximating a 120 Hz refresh.
pub const DRAW_DELAY: Duration = Duration::from_millis(1_000 / 120);

/// Pause before giving up on a program that hit a fatal error.
pub const HALT_DELAY: Duration = Duration::from_secs(1);

/// Runtime settings for an `Emulator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub draw_delay: Duration,
    pub halt_delay: Duration,
    /// Seed for the random number generator, or `None` to seed from entropy.
    pub seed: Option<u64>,
}

impl Config {
    /// No pauses at all. Useful in tests.
    pub fn instant() -> Config {
        Config {
            draw_delay: Duration::from_millis(0),
            halt_delay: Duration::from_millis(0),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Config {
        self.seed = Some(seed);
        self
    }

    pub fn with_draw_delay(mut self, draw_delay: Duration) -> Config {
        self.draw_delay = draw_delay;
        self
    }

    pub fn with_halt_delay(mut self, halt_delay: Duration) -> Config {
        self.halt_delay = halt_delay;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            draw_delay: DRAW_DELAY,
            halt_delay: HALT_DELAY,
            seed: None,
        }
    }
}
