//! Register file boundary.
//!
//! Drivers never touch memory directly.  They address registers by name
//! through [`RegisterFile`], so the same driver code runs against the real
//! ATmega32 I/O space or the in-memory simulation used by the tests.
//!
//! ## Dual-target design
//!
//! On AVR: `adapters::atmega32::Atmega32Registers` (volatile access).
//! On host/test: `adapters::sim::SimRegisters` (in-memory bank).

use crate::drivers::gpio::Port;

/// Every register the stack reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// DDRx: 1 = output.
    Ddr(Port),
    /// PORTx: output latch, or pull-up enable on input pins.
    Latch(Port),
    /// PINx: sampled pin levels (read only).
    Input(Port),
    Admux,
    Adcsra,
    Adcl,
    Adch,
    Tccr0,
    Tcnt0,
    Ocr0,
}

impl Register {
    /// Number of distinct registers (for array-backed register banks).
    pub const COUNT: usize = 4 * 3 + 7;

    /// Dense index in `0..COUNT`.
    pub const fn index(self) -> usize {
        match self {
            Self::Ddr(port) => port as usize,
            Self::Latch(port) => 4 + port as usize,
            Self::Input(port) => 8 + port as usize,
            Self::Admux => 12,
            Self::Adcsra => 13,
            Self::Adcl => 14,
            Self::Adch => 15,
            Self::Tccr0 => 16,
            Self::Tcnt0 => 17,
            Self::Ocr0 => 18,
        }
    }
}

// ---------------------------------------------------------------------------
// Bit positions
// ---------------------------------------------------------------------------

pub mod admux {
    /// REFS1:0 live in the top two bits.
    pub const REFS_SHIFT: u8 = 6;
    pub const REFS_MASK: u8 = 0xC0;
    /// MUX4:0 select the input channel.
    pub const MUX_MASK: u8 = 0x1F;
}

pub mod adcsra {
    pub const ADEN: u8 = 1 << 7;
    pub const ADSC: u8 = 1 << 6;
    pub const ADIF: u8 = 1 << 4;
    pub const ADPS_MASK: u8 = 0x07;
}

pub mod tccr0 {
    pub const WGM00: u8 = 1 << 6;
    pub const COM01: u8 = 1 << 5;
    pub const WGM01: u8 = 1 << 3;
    pub const CS01: u8 = 1 << 1;
}

// ---------------------------------------------------------------------------
// RegisterFile
// ---------------------------------------------------------------------------

/// Byte-wide register access.  Implementations must not reorder or merge
/// accesses; each call is one bus access on real hardware.
pub trait RegisterFile {
    fn read(&self, reg: Register) -> u8;

    fn write(&mut self, reg: Register, value: u8);

    /// Read-modify-write setting every bit in `mask`.
    fn set_bits(&mut self, reg: Register, mask: u8) {
        let value = self.read(reg);
        self.write(reg, value | mask);
    }

    /// Read-modify-write clearing every bit in `mask`.
    fn clear_bits(&mut self, reg: Register, mask: u8) {
        let value = self.read(reg);
        self.write(reg, value & !mask);
    }

    /// Replace the bits selected by `mask` with those of `value`.
    fn modify(&mut self, reg: Register, mask: u8, value: u8) {
        let current = self.read(reg);
        self.write(reg, (current & !mask) | (value & mask));
    }

    /// True when every bit of `mask` is set.
    fn bits_set(&self, reg: Register, mask: u8) -> bool {
        self.read(reg) & mask == mask
    }

    /// 10-bit right-aligned conversion result.  ADCL must be read first;
    /// the hardware locks the data pair until ADCH is read.
    fn read_adc_data(&self) -> u16 {
        let low = self.read(Register::Adcl);
        let high = self.read(Register::Adch);
        (u16::from(high & 0x03) << 8) | u16::from(low)
    }
}
