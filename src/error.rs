use core::fmt;

/// Point in the frame where the sampler was waiting when it gave up.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Line still high after the host released it.
    Release,
    /// Sensor acknowledgement, low half.
    ResponseLow,
    /// Sensor acknowledgement, high half.
    ResponseHigh,
    /// Low phase of the given bit (0..40).
    BitLow(u8),
    /// High phase of the given bit (0..40).
    BitHigh(u8),
}

/// Possible errors from the DHT driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// Timed out waiting for a pin state change.
    Timeout(Phase),
    /// Checksum did not match the received data.
    ChecksumMismatch {
        /// Checksum computed from the payload bytes.
        expected: u8,
        /// Checksum byte sent by the sensor.
        received: u8,
    },
    /// Error from the GPIO pin (input/output).
    PinError(E),
}

impl<E> DhtError<E> {
    /// Whether another attempt may succeed.
    ///
    /// Timeouts and checksum failures are caused by a noisy or missed frame.
    /// Pin errors come from the HAL and are returned to the caller as is.
    pub fn is_transient(&self) -> bool {
        !matches!(self, DhtError::PinError(_))
    }
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}

impl<E: fmt::Debug> fmt::Display for DhtError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DhtError::Timeout(phase) => write!(f, "timed out waiting for line in {phase:?}"),
            DhtError::ChecksumMismatch { expected, received } => write!(
                f,
                "checksum mismatch: expected {expected:#04x}, received {received:#04x}"
            ),
            DhtError::PinError(e) => write!(f, "pin error: {e:?}"),
        }
    }
}
