//! Pulse acquisition: start signal, then 40 bits timed by sample counting.
//!
//! Every bit starts with a ~50 µs low phase followed by a high phase of
//! ~26-28 µs for a 0 or ~70 µs for a 1. Rather than timing pulses in
//! microseconds, the sampler counts how many reads each phase lasts and
//! compares the two counts, which keeps it independent of how fast the host
//! can poll the pin.

use embedded_hal::{delay::DelayNs, digital::PinState};

use crate::{
    config::Config,
    error::{DhtError, Phase},
    line::SignalLine,
};

/// Bits in one frame.
pub const FRAME_BITS: usize = 40;

/// The five bytes of one frame, in the order they were received.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawMessage([u8; 5]);

impl RawMessage {
    /// All five bytes, checksum last.
    pub fn bytes(&self) -> [u8; 5] {
        self.0
    }

    /// The four data bytes covered by the checksum.
    pub fn payload(&self) -> [u8; 4] {
        let [b0, b1, b2, b3, _] = self.0;
        [b0, b1, b2, b3]
    }

    /// The trailing checksum byte as sent by the sensor.
    pub fn checksum(&self) -> u8 {
        self.0[4]
    }

    /// Shifts `bit` into the byte that frame bit `index` belongs to, MSB first.
    fn push_bit(&mut self, index: usize, bit: bool) {
        let byte = &mut self.0[index / 8];
        *byte = (*byte << 1) | bit as u8;
    }
}

impl From<[u8; 5]> for RawMessage {
    fn from(bytes: [u8; 5]) -> Self {
        RawMessage(bytes)
    }
}

/// Sample counts of the low and high phase of one bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitSample {
    /// Consecutive low reads.
    pub low: u32,
    /// Consecutive high reads.
    pub high: u32,
}

impl BitSample {
    /// A bit is 1 only when its high phase outlasted its low phase.
    pub fn bit(&self) -> bool {
        self.high > self.low
    }
}

/// Requests and reads one frame.
///
/// The line must be configured as output and idle high. On return the line
/// is still configured as input; restoring it is up to the caller.
///
/// A corrupt frame is not detected here; it surfaces as a checksum mismatch
/// when decoded.
pub fn acquire<L, D>(
    line: &mut L,
    delay: &mut D,
    config: &Config,
) -> Result<RawMessage, DhtError<L::Error>>
where
    L: SignalLine,
    D: DelayNs,
{
    // MCU sends start request
    line.write_level(PinState::Low)?;
    delay.delay_ms(config.start_signal_ms);
    line.configure_input_pull_up()?;

    let max = config.max_samples;
    count_while(line, PinState::High, max, Phase::Release)?;
    if config.skip_response {
        count_while(line, PinState::Low, max, Phase::ResponseLow)?; // 80us
        count_while(line, PinState::High, max, Phase::ResponseHigh)?; // 80us
    }

    let mut message = RawMessage::default();
    for index in 0..FRAME_BITS {
        let sample = sample_bit(line, index as u8, max)?;
        message.push_bit(index, sample.bit());
    }
    Ok(message)
}

/// Measures one bit period, entered with the line already low.
pub fn sample_bit<L: SignalLine>(
    line: &mut L,
    index: u8,
    max_samples: u32,
) -> Result<BitSample, DhtError<L::Error>> {
    let low = count_while(line, PinState::Low, max_samples, Phase::BitLow(index))?;
    let high = count_while(line, PinState::High, max_samples, Phase::BitHigh(index))?;
    Ok(BitSample { low, high })
}

/// Busy-waits while the line reads `level`.
///
/// The count starts at 1: the read that ended the previous phase was already
/// the first sample of this one. Fails on the first matching read after the
/// count has reached `max_samples`, so the count never exceeds it.
fn count_while<L: SignalLine>(
    line: &mut L,
    level: PinState,
    max_samples: u32,
    phase: Phase,
) -> Result<u32, DhtError<L::Error>> {
    let mut count = 1;
    while line.read_level()? == level {
        if count >= max_samples {
            return Err(DhtError::Timeout(phase));
        }
        count += 1;
    }
    Ok(count)
}
