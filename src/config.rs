/// Default number of attempts made by [`Dht::read`](crate::Dht::read).
pub const DEFAULT_RETRIES: u8 = 5;

/// Default ceiling on consecutive same-level samples in one phase.
///
/// A bit's longest phase is ~70 µs. Ten thousand reads leaves room for hosts
/// that sample every few nanoseconds while still giving up quickly on a
/// disconnected line.
pub const DEFAULT_MAX_SAMPLES: u32 = 10_000;

/// Timing and retry settings for a [`Dht`](crate::Dht).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Attempts made by `read()`.
    pub retries: u8,
    /// How long the start signal holds the line low. The datasheet minimum is 18 ms.
    pub start_signal_ms: u32,
    /// Pause between attempts. The sensor needs about a second to re-sample.
    pub cooldown_ms: u32,
    /// Pause after the line is first driven high, before the first request.
    pub settle_ms: u32,
    /// Samples allowed in a single phase before the attempt times out.
    pub max_samples: u32,
    /// Also consume the sensor's 80 µs low / 80 µs high acknowledgement
    /// before bit 0.
    ///
    /// Off by default: slow hosts finish reconfiguring the pin after the
    /// acknowledgement is over. Enable it when input switching is fast.
    pub skip_response: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            retries: DEFAULT_RETRIES,
            start_signal_ms: 20,
            cooldown_ms: 1_000,
            settle_ms: 25,
            max_samples: DEFAULT_MAX_SAMPLES,
            skip_response: false,
        }
    }
}

impl Config {
    /// Sets [`retries`](Self::retries).
    pub fn with_retries(mut self, retries: u8) -> Self {
        self.retries = retries;
        self
    }

    /// Sets [`start_signal_ms`](Self::start_signal_ms).
    pub fn with_start_signal_ms(mut self, ms: u32) -> Self {
        self.start_signal_ms = ms;
        self
    }

    /// Sets [`cooldown_ms`](Self::cooldown_ms).
    pub fn with_cooldown_ms(mut self, ms: u32) -> Self {
        self.cooldown_ms = ms;
        self
    }

    /// Sets [`settle_ms`](Self::settle_ms).
    pub fn with_settle_ms(mut self, ms: u32) -> Self {
        self.settle_ms = ms;
        self
    }

    /// Sets [`max_samples`](Self::max_samples).
    pub fn with_max_samples(mut self, max_samples: u32) -> Self {
        self.max_samples = max_samples;
        self
    }

    /// Sets [`skip_response`](Self::skip_response).
    pub fn with_skip_response(mut self, skip: bool) -> Self {
        self.skip_response = skip;
        self
    }
}
