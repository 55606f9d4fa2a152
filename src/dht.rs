use embedded_hal::{delay::DelayNs, digital::PinState};

use crate::{
    acquire::acquire,
    config::Config,
    error::DhtError,
    line::SignalLine,
    profile::{DeviceProfile, Reading},
};

/// Driver for the DHT11 / DHT22 temperature and humidity sensors.
pub struct Dht<L, D> {
    line: L,
    delay: D,
    profile: DeviceProfile,
    config: Config,
}

impl<L, D> Dht<L, D>
where
    L: SignalLine,
    D: DelayNs,
{
    /// Creates a new driver with the default [`Config`].
    ///
    /// # Arguments
    ///
    /// * `line` - The data line. Wrap a plain open-drain pin in [`OpenDrainLine`](crate::OpenDrainLine).
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    /// * `profile` - Byte layout of the attached sensor.
    ///
    /// # Errors
    ///
    /// Returns `DhtError::PinError` if the line cannot be driven high.
    pub fn new(line: L, delay: D, profile: DeviceProfile) -> Result<Self, DhtError<L::Error>> {
        Self::with_config(line, delay, profile, Config::default())
    }

    /// Creates a new driver, drives the line idle high and waits
    /// `config.settle_ms` for the sensor to notice.
    pub fn with_config(
        mut line: L,
        mut delay: D,
        profile: DeviceProfile,
        config: Config,
    ) -> Result<Self, DhtError<L::Error>> {
        line.configure_output(PinState::High)?;
        delay.delay_ms(config.settle_ms);
        Ok(Dht {
            line,
            delay,
            profile,
            config,
        })
    }

    /// Byte layout used to decode frames.
    pub fn profile(&self) -> DeviceProfile {
        self.profile
    }

    /// Timing and retry settings.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Takes a measurement using `config.retries` attempts.
    pub fn read(&mut self) -> Result<Reading, DhtError<L::Error>> {
        self.measure(self.config.retries)
    }

    /// Takes a measurement, making up to `retries` attempts.
    ///
    /// `retries` is clamped to at least 1. Attempts are separated by
    /// `config.cooldown_ms`; the first successful decode is returned without
    /// using the rest of the budget.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` from the first frame with a valid checksum.
    /// * `Err(DhtError::Timeout)` or `Err(DhtError::ChecksumMismatch)` from the
    ///   last attempt once all attempts failed.
    /// * `Err(DhtError::PinError)` as soon as the GPIO reports an error.
    pub fn measure(&mut self, retries: u8) -> Result<Reading, DhtError<L::Error>> {
        let retries = retries.max(1);
        let mut attempt = 1;
        loop {
            debug!("dht: attempt {} of {}", attempt, retries);
            match self.acquire_once() {
                Ok(reading) => return Ok(reading),
                Err(err) if err.is_transient() && attempt < retries => {
                    attempt += 1;
                    self.delay.delay_ms(self.config.cooldown_ms);
                }
                Err(err) => {
                    if err.is_transient() {
                        warn!("dht: no valid reading after {} attempts", retries);
                    }
                    return Err(err);
                }
            }
        }
    }

    /// Like [`measure`](Self::measure), but reports exhausted retries as
    /// [`Reading::SENTINEL`] instead of an error.
    ///
    /// Only pin errors are returned as `Err`.
    ///
    /// This is not a drop-in for a loop that retries while the result equals
    /// `(0.0, 0.0)`: a frame with a valid checksum that decodes to 0 %RH and
    /// 0 °C ends the measurement here and is returned as is, without further
    /// attempts. The returned value still cannot tell that case apart from
    /// exhausted retries.
    pub fn measure_or_sentinel(&mut self, retries: u8) -> Result<Reading, DhtError<L::Error>> {
        match self.measure(retries) {
            Err(err) if err.is_transient() => Ok(Reading::SENTINEL),
            other => other,
        }
    }

    /// Runs one attempt: start signal, frame, decode. No retry, no cool-down.
    ///
    /// Unless the pin itself failed, the line is left configured as output and
    /// idle high, ready for the next start signal.
    pub fn acquire_once(&mut self) -> Result<Reading, DhtError<L::Error>> {
        let outcome = match acquire(&mut self.line, &mut self.delay, &self.config) {
            Err(DhtError::PinError(e)) => return Err(DhtError::PinError(e)),
            outcome => outcome,
        };
        self.line.configure_output(PinState::High)?;

        let message = outcome.inspect_err(|err| {
            if let DhtError::Timeout(phase) = err {
                warn!("dht: timed out in {:?}", phase);
            }
        })?;
        trace!("dht: raw frame {:?}", message.bytes());

        self.profile.decode(&message).ok_or_else(|| {
            let expected = self.profile.expected_checksum(&message);
            let received = message.checksum();
            warn!("dht: checksum mismatch, expected {} received {}", expected, received);
            DhtError::ChecksumMismatch { expected, received }
        })
    }

    /// Releases the line and delay provider.
    pub fn release(self) -> (L, D) {
        (self.line, self.delay)
    }
}
