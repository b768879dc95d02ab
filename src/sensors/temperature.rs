//! LM35 linear temperature sensor (10 mV/°C).
//!
//! Read through the analog sampler on a fixed channel.  The transfer
//! function is a straight line: the sensor's 1.5 V full scale is 150 °C and
//! the converter spans 0..=1023 over the 2.56 V internal reference.
//! Fractional degrees are truncated, so readings carry a negative bias of
//! just under one degree.

use crate::drivers::adc::{ADC_MAX_VALUE, ADC_REF_VOLT, Adc, Channel};
use crate::drivers::registers::RegisterFile;

/// Sensor full-scale temperature, °C.
pub const MAX_TEMP_C: u8 = 150;
/// Sensor output at full scale, volts.
pub const SENSOR_MAX_VOLT: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureReading {
    pub raw: u16,
    pub celsius: u8,
}

/// Convert a raw sample to whole degrees.
///
/// Samples above the sensor's 1.5 V full scale would compute past 150 °C
/// (up to 256 at code 1023); they are clamped to [`MAX_TEMP_C`].
pub fn sample_to_celsius(raw: u16) -> u8 {
    let celsius = f32::from(raw) * f32::from(MAX_TEMP_C) * ADC_REF_VOLT
        / (f32::from(ADC_MAX_VALUE) * SENSOR_MAX_VOLT);
    if celsius >= f32::from(MAX_TEMP_C) {
        MAX_TEMP_C
    } else {
        celsius as u8
    }
}

pub struct TemperatureSensor {
    channel: Channel,
}

impl TemperatureSensor {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    /// Take one fresh sample; nothing is cached between calls.
    pub fn read<R: RegisterFile>(&self, adc: &Adc, regs: &mut R) -> TemperatureReading {
        let raw = adc.read_channel(regs, self.channel);
        TemperatureReading {
            raw,
            celsius: sample_to_celsius(raw),
        }
    }
}
