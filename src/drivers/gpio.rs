//! Digital I/O access for ports A..D.
//!
//! Typed identifiers make out-of-range ports and pins unrepresentable on the
//! main path.  The `*_raw` entry points accept bare numeric ids the way the
//! board wiring tables used to, and keep the old contract: an invalid id is
//! a silent no-op for writes and reads back a defined default (`Low` / `0`).

use serde::{Deserialize, Serialize};

use crate::drivers::registers::{Register, RegisterFile};
use crate::error::{GpioError, Result};

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl TryFrom<u8> for Port {
    type Error = GpioError;

    fn try_from(id: u8) -> core::result::Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::A),
            1 => Ok(Self::B),
            2 => Ok(Self::C),
            3 => Ok(Self::D),
            _ => Err(GpioError::InvalidPort(id)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pin {
    P0 = 0,
    P1 = 1,
    P2 = 2,
    P3 = 3,
    P4 = 4,
    P5 = 5,
    P6 = 6,
    P7 = 7,
}

impl Pin {
    pub const ALL: [Pin; 8] = [
        Pin::P0,
        Pin::P1,
        Pin::P2,
        Pin::P3,
        Pin::P4,
        Pin::P5,
        Pin::P6,
        Pin::P7,
    ];

    /// Single-bit mask for this pin within its port register.
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }
}

impl TryFrom<u8> for Pin {
    type Error = GpioError;

    fn try_from(id: u8) -> core::result::Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(id))
            .copied()
            .ok_or(GpioError::InvalidPin(id))
    }
}

/// A fully-qualified pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinId {
    pub port: Port,
    pub pin: Pin,
}

impl PinId {
    pub const fn new(port: Port, pin: Pin) -> Self {
        Self { port, pin }
    }

    /// Validate a numeric (port, pin) pair.
    pub fn from_raw(port: u8, pin: u8) -> Result<Self> {
        Ok(Self::new(Port::try_from(port)?, Pin::try_from(pin)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Whole-port direction; the discriminant is the DDR byte written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    AllInput = 0x00,
    AllOutput = 0xFF,
}

// ---------------------------------------------------------------------------
// Gpio
// ---------------------------------------------------------------------------

/// Register façade over the four 8-bit ports.
pub struct Gpio<'r, R: RegisterFile> {
    regs: &'r mut R,
}

impl<'r, R: RegisterFile> Gpio<'r, R> {
    pub fn new(regs: &'r mut R) -> Self {
        Self { regs }
    }

    pub fn set_direction(&mut self, id: PinId, dir: Direction) {
        let ddr = Register::Ddr(id.port);
        match dir {
            Direction::Input => self.regs.clear_bits(ddr, id.pin.mask()),
            Direction::Output => self.regs.set_bits(ddr, id.pin.mask()),
        }
    }

    /// Drive the output latch.  On an input pin the same latch bit enables
    /// (`High`) or disables (`Low`) the internal pull-up.
    pub fn write_pin(&mut self, id: PinId, level: Level) {
        let latch = Register::Latch(id.port);
        match level {
            Level::Low => self.regs.clear_bits(latch, id.pin.mask()),
            Level::High => self.regs.set_bits(latch, id.pin.mask()),
        }
    }

    pub fn read_pin(&self, id: PinId) -> Level {
        Level::from(self.regs.bits_set(Register::Input(id.port), id.pin.mask()))
    }

    pub fn set_port_direction(&mut self, port: Port, dir: PortDirection) {
        self.regs.write(Register::Ddr(port), dir as u8);
    }

    pub fn write_port(&mut self, port: Port, value: u8) {
        self.regs.write(Register::Latch(port), value);
    }

    pub fn read_port(&self, port: Port) -> u8 {
        self.regs.read(Register::Input(port))
    }

    // ── Numeric-id entry points ───────────────────────────────

    pub fn set_direction_raw(&mut self, port: u8, pin: u8, dir: Direction) {
        if let Ok(id) = PinId::from_raw(port, pin) {
            self.set_direction(id, dir);
        }
    }

    pub fn write_pin_raw(&mut self, port: u8, pin: u8, level: Level) {
        if let Ok(id) = PinId::from_raw(port, pin) {
            self.write_pin(id, level);
        }
    }

    /// `Level::Low` for an invalid id.
    pub fn read_pin_raw(&self, port: u8, pin: u8) -> Level {
        PinId::from_raw(port, pin).map_or(Level::Low, |id| self.read_pin(id))
    }

    pub fn set_port_direction_raw(&mut self, port: u8, dir: PortDirection) {
        if let Ok(port) = Port::try_from(port) {
            self.set_port_direction(port, dir);
        }
    }

    pub fn write_port_raw(&mut self, port: u8, value: u8) {
        if let Ok(port) = Port::try_from(port) {
            self.write_port(port, value);
        }
    }

    /// `0` for an invalid id.
    pub fn read_port_raw(&self, port: u8) -> u8 {
        Port::try_from(port).map_or(0, |port| self.read_port(port))
    }
}
