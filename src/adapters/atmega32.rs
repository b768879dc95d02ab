//! ATmega32 memory-mapped register file.
//!
//! Data-space addresses (I/O address + 0x20) from the ATmega32 datasheet.
//! Every access is a single volatile byte load or store.

use core::ptr;

use crate::drivers::gpio::Port;
use crate::drivers::registers::{Register, RegisterFile};

const fn address(reg: Register) -> usize {
    match reg {
        Register::Input(Port::A) => 0x39,
        Register::Ddr(Port::A) => 0x3A,
        Register::Latch(Port::A) => 0x3B,
        Register::Input(Port::B) => 0x36,
        Register::Ddr(Port::B) => 0x37,
        Register::Latch(Port::B) => 0x38,
        Register::Input(Port::C) => 0x33,
        Register::Ddr(Port::C) => 0x34,
        Register::Latch(Port::C) => 0x35,
        Register::Input(Port::D) => 0x30,
        Register::Ddr(Port::D) => 0x31,
        Register::Latch(Port::D) => 0x32,
        Register::Adcl => 0x24,
        Register::Adch => 0x25,
        Register::Adcsra => 0x26,
        Register::Admux => 0x27,
        Register::Tcnt0 => 0x52,
        Register::Tccr0 => 0x53,
        Register::Ocr0 => 0x5C,
    }
}

/// Zero-sized handle to the on-chip I/O space.  Only one may exist.
pub struct Atmega32Registers {
    _private: (),
}

impl Atmega32Registers {
    /// # Safety
    ///
    /// The caller must be the sole owner of the I/O registers listed in
    /// [`Register`] for the life of the returned value.
    pub unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl RegisterFile for Atmega32Registers {
    fn read(&self, reg: Register) -> u8 {
        // SAFETY: `address` only yields mapped I/O registers of this part.
        unsafe { ptr::read_volatile(address(reg) as *const u8) }
    }

    fn write(&mut self, reg: Register, value: u8) {
        // SAFETY: as above; exclusive ownership is guaranteed by `steal`.
        unsafe { ptr::write_volatile(address(reg) as *mut u8, value) }
    }
}
