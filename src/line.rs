//! The single-wire data line shared by the host and the sensor.

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, PinState};

/// Bidirectional digital line the driver talks to the sensor over.
///
/// The host drives the line while sending the start signal and hands it to
/// the sensor for the rest of the frame. Implementations are thin pass-throughs
/// to the HAL; they hold no protocol state.
pub trait SignalLine {
    /// Error type returned by the underlying GPIO.
    type Error;

    /// Switches the line to output and drives `level`.
    fn configure_output(&mut self, level: PinState) -> Result<(), Self::Error>;

    /// Switches the line to input with the pull-up enabled.
    fn configure_input_pull_up(&mut self) -> Result<(), Self::Error>;

    /// Drives `level` while configured as output.
    fn write_level(&mut self, level: PinState) -> Result<(), Self::Error>;

    /// Samples the current level.
    fn read_level(&mut self) -> Result<PinState, Self::Error>;
}

/// [`SignalLine`] over an open-drain pin with an external pull-up.
///
/// Such a pin is input and output at once: driving it high releases the bus to
/// the pull-up, so "configure as input" is just a release. This is how most
/// DHT breakout boards are wired and what flex pins in the common HALs give you.
pub struct OpenDrainLine<PIN> {
    pin: PIN,
}

impl<PIN> OpenDrainLine<PIN> {
    /// Wraps a pin that supports both [`InputPin`] and [`OutputPin`].
    pub fn new(pin: PIN) -> Self {
        OpenDrainLine { pin }
    }

    /// Returns the wrapped pin.
    pub fn into_inner(self) -> PIN {
        self.pin
    }
}

impl<PIN> SignalLine for OpenDrainLine<PIN>
where
    PIN: InputPin + OutputPin,
{
    type Error = <PIN as ErrorType>::Error;

    fn configure_output(&mut self, level: PinState) -> Result<(), Self::Error> {
        self.pin.set_state(level)
    }

    fn configure_input_pull_up(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()
    }

    fn write_level(&mut self, level: PinState) -> Result<(), Self::Error> {
        self.pin.set_state(level)
    }

    fn read_level(&mut self) -> Result<PinState, Self::Error> {
        Ok(PinState::from(self.pin.is_high()?))
    }
}
