//! Unified error types for the ThermoFan firmware.
//!
//! Every driver validates its inputs into one of these kinds.  None of them
//! ever leaves the stack as a fault: the lenient driver entry points turn
//! them into a silent no-op, a defined default, or a stale sample.  The
//! typed `Result` paths exist so the contracts can be exercised in tests.
//! All variants are `Copy` so they cost nothing to pass around on an 8-bit
//! target.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A port or pin identifier was out of range.
    Gpio(GpioError),
    /// The analog sampler was asked for something it cannot do.
    Adc(AdcError),
    /// The character display was addressed outside its geometry.
    Display(DisplayError),
    /// The motor was commanded outside its documented domain.
    Actuator(ActuatorError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(e) => write!(f, "gpio: {e}"),
            Self::Adc(e) => write!(f, "adc: {e}"),
            Self::Display(e) => write!(f, "display: {e}"),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Digital I/O
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Port id outside A..=D (0..=3).
    InvalidPort(u8),
    /// Pin id outside 0..=7.
    InvalidPin(u8),
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort(id) => write!(f, "invalid port id {id}"),
            Self::InvalidPin(id) => write!(f, "invalid pin id {id}"),
        }
    }
}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio(e)
    }
}

// ---------------------------------------------------------------------------
// Analog sampler
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcError {
    /// Channel id outside 0..=7.  No conversion was started; `stale` is
    /// whatever the data register held from the previous conversion.
    InvalidChannel { channel: u8, stale: u16 },
}

impl fmt::Display for AdcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChannel { channel, stale } => {
                write!(f, "invalid channel {channel} (stale sample {stale})")
            }
        }
    }
}

impl From<AdcError> for Error {
    fn from(e: AdcError) -> Self {
        Self::Adc(e)
    }
}

// ---------------------------------------------------------------------------
// Character display
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// Row outside 0..=3.
    InvalidRow(u8),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRow(row) => write!(f, "invalid row {row}"),
        }
    }
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

// ---------------------------------------------------------------------------
// Actuator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// Speed percentage above 100.
    SpeedOutOfRange(u8),
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpeedOutOfRange(speed) => write!(f, "speed {speed}% out of range"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
