//! Single-shot 10-bit analog sampler.
//!
//! Reference source and clock prescaler are programmed once by
//! [`Adc::init`]; the returned handle is the only way to sample, so a
//! conversion can never be issued against an unconfigured converter.
//! Conversions block (busy-poll ADIF) and are strictly sequential.

use serde::{Deserialize, Serialize};

use crate::drivers::registers::{Register, RegisterFile, adcsra, admux};
use crate::error::AdcError;

/// Full-scale conversion result.
pub const ADC_MAX_VALUE: u16 = 1023;
/// Internal bandgap reference, volts.
pub const ADC_REF_VOLT: f32 = 2.56;

/// REFS1:0 encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceVoltage {
    /// External AREF pin.
    Aref = 0,
    /// AVCC supply.
    Avcc = 1,
    /// Internal 2.56 V.
    Internal = 3,
}

/// ADPS2:0 encoding, F_CPU divided by the named factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prescaler {
    Div2 = 1,
    Div4 = 2,
    Div8 = 3,
    Div16 = 4,
    Div32 = 5,
    Div64 = 6,
    Div128 = 7,
}

impl Prescaler {
    pub const fn divisor(self) -> u16 {
        1 << self as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdcConfig {
    pub reference: ReferenceVoltage,
    pub prescaler: Prescaler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Adc0 = 0,
    Adc1 = 1,
    Adc2 = 2,
    Adc3 = 3,
    Adc4 = 4,
    Adc5 = 5,
    Adc6 = 6,
    Adc7 = 7,
}

impl Channel {
    pub const ALL: [Channel; 8] = [
        Channel::Adc0,
        Channel::Adc1,
        Channel::Adc2,
        Channel::Adc3,
        Channel::Adc4,
        Channel::Adc5,
        Channel::Adc6,
        Channel::Adc7,
    ];
}

impl TryFrom<u8> for Channel {
    type Error = u8;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(usize::from(id)).copied().ok_or(id)
    }
}

/// Handle to an initialised converter.
#[derive(Debug, Clone, Copy)]
pub struct Adc {
    config: AdcConfig,
}

impl Adc {
    /// Program reference and prescaler and enable the converter.
    /// Calling it again with the same config leaves the registers unchanged.
    pub fn init<R: RegisterFile>(regs: &mut R, config: AdcConfig) -> Self {
        regs.modify(
            Register::Admux,
            admux::REFS_MASK,
            (config.reference as u8) << admux::REFS_SHIFT,
        );
        regs.set_bits(Register::Adcsra, adcsra::ADEN);
        regs.modify(Register::Adcsra, adcsra::ADPS_MASK, config.prescaler as u8);

        log::info!(
            "adc: enabled (ref={:?}, clk=F_CPU/{})",
            config.reference,
            config.prescaler.divisor()
        );
        Self { config }
    }

    pub fn config(&self) -> AdcConfig {
        self.config
    }

    /// Select `channel`, run one conversion and return the raw sample.
    ///
    /// Blocks until the converter raises ADIF.  There is no timeout: a
    /// converter that never completes hangs the caller.
    pub fn read_channel<R: RegisterFile>(&self, regs: &mut R, channel: Channel) -> u16 {
        regs.modify(Register::Admux, admux::MUX_MASK, channel as u8);
        regs.set_bits(Register::Adcsra, adcsra::ADSC);
        while !regs.bits_set(Register::Adcsra, adcsra::ADIF) {}
        // ADIF is cleared by writing a one to it.
        regs.set_bits(Register::Adcsra, adcsra::ADIF);
        regs.read_adc_data()
    }

    /// Numeric-channel variant.  An invalid id starts no conversion and
    /// reports whatever the data register still holds.
    pub fn read_channel_id<R: RegisterFile>(&self, regs: &mut R, channel: u8) -> Result<u16, AdcError> {
        match Channel::try_from(channel) {
            Ok(channel) => Ok(self.read_channel(regs, channel)),
            Err(channel) => Err(AdcError::InvalidChannel {
                channel,
                stale: regs.read_adc_data(),
            }),
        }
    }

    /// Legacy behaviour: hand back the stale register contents for an
    /// invalid channel instead of failing.
    pub fn read_channel_lenient<R: RegisterFile>(&self, regs: &mut R, channel: u8) -> u16 {
        self.read_channel_id(regs, channel).unwrap_or_else(|err| {
            log::warn!("adc: {err}, returning stale sample");
            match err {
                AdcError::InvalidChannel { stale, .. } => stale,
            }
        })
    }
}
