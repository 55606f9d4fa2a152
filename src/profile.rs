use crate::acquire::RawMessage;

/// Reading returned by the sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Relative humidity in percent.
    pub relative_humidity: f32,
    /// Temperature in degrees Celsius.
    pub temperature: f32,
}

impl Reading {
    /// The all-zero reading reported when no valid measurement was obtained.
    ///
    /// A genuine 0 %RH / 0 °C reading looks the same; prefer the `Result`
    /// returned by [`Dht::measure`](crate::Dht::measure) when that matters.
    pub const SENTINEL: Reading = Reading {
        relative_humidity: 0.0,
        temperature: 0.0,
    };

    /// Whether this equals [`Reading::SENTINEL`].
    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

/// `(humidity, temperature)`
impl From<Reading> for (f32, f32) {
    fn from(reading: Reading) -> Self {
        (reading.relative_humidity, reading.temperature)
    }
}

/// Which bytes the checksum of an integer-layout message covers.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegerChecksum {
    /// `humidity + temperature`. Decimal bytes are ignored.
    TwoByte,
    /// All four payload bytes. Decimal bytes are added as 1/256 fractions.
    FourByte,
}

/// How the high temperature byte of a fixed-point message is interpreted.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemperatureSign {
    /// Plain 16-bit value. Negative temperatures come out as large positives.
    Unsigned,
    /// Bit 7 of the high byte marks a negative value.
    SignMagnitude,
}

/// Byte layout and unit conversion of one sensor model.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceProfile {
    /// `[humidity, decimal, temperature, decimal, checksum]`, whole units.
    Integer(IntegerChecksum),
    /// `[hum_hi, hum_lo, temp_hi, temp_lo, checksum]`, tenths of a unit.
    FixedPoint(TemperatureSign),
}

impl DeviceProfile {
    /// DHT11.
    pub const DHT11: DeviceProfile = DeviceProfile::Integer(IntegerChecksum::TwoByte);
    /// DHT22 / AM2302, temperature read unsigned.
    pub const DHT22: DeviceProfile = DeviceProfile::FixedPoint(TemperatureSign::Unsigned);

    /// Checksum the sensor should have sent for this message's payload.
    pub fn expected_checksum(self, message: &RawMessage) -> u8 {
        let [b0, b1, b2, b3] = message.payload();
        match self {
            DeviceProfile::Integer(IntegerChecksum::TwoByte) => b0.wrapping_add(b2),
            DeviceProfile::Integer(IntegerChecksum::FourByte) | DeviceProfile::FixedPoint(_) => {
                [b0, b1, b2, b3]
                    .iter()
                    .fold(0u8, |sum, v| sum.wrapping_add(*v))
            }
        }
    }

    /// Decodes `message`, or `None` if its checksum is wrong.
    pub fn decode(self, message: &RawMessage) -> Option<Reading> {
        if self.expected_checksum(message) != message.checksum() {
            return None;
        }

        let [b0, b1, b2, b3] = message.payload();
        let reading = match self {
            DeviceProfile::Integer(IntegerChecksum::TwoByte) => Reading {
                relative_humidity: b0 as f32,
                temperature: b2 as f32,
            },
            DeviceProfile::Integer(IntegerChecksum::FourByte) => Reading {
                relative_humidity: b0 as f32 + b1 as f32 / 256.0,
                temperature: b2 as f32 + b3 as f32 / 256.0,
            },
            DeviceProfile::FixedPoint(sign) => {
                let relative_humidity = u16::from_be_bytes([b0, b1]) as f32 / 10.0;
                let temperature = match sign {
                    TemperatureSign::Unsigned => u16::from_be_bytes([b2, b3]) as f32 / 10.0,
                    TemperatureSign::SignMagnitude => {
                        let magnitude = u16::from_be_bytes([b2 & 0b0111_1111, b3]) as f32 / 10.0;
                        if b2 >> 7 != 0 { -magnitude } else { magnitude }
                    }
                };
                Reading {
                    relative_humidity,
                    temperature,
                }
            }
        };
        Some(reading)
    }

    /// Like [`decode`](Self::decode), with [`Reading::SENTINEL`] for a bad checksum.
    pub fn decode_or_sentinel(self, message: &RawMessage) -> Reading {
        self.decode(message).unwrap_or(Reading::SENTINEL)
    }
}
