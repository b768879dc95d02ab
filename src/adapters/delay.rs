//! Blocking delay providers behind `embedded_hal::delay::DelayNs`.
//!
//! - **`target_arch = "avr"`**: [`BusyDelay`] spins on `nop` for a cycle
//!   count derived from the fixed core clock.
//! - **host**: [`SimDelay`] only accounts for the requested time so tests
//!   can assert protocol timing without sleeping.

use embedded_hal::delay::DelayNs;

/// Core clock of the target board.
pub const F_CPU_HZ: u32 = 1_000_000;

/// Cycle-counted busy wait.  Accuracy is only as good as the loop cost
/// estimate; every caller asks for generous margins.
#[cfg(all(target_arch = "avr", feature = "atmega32"))]
#[derive(Debug, Default)]
pub struct BusyDelay;

#[cfg(all(target_arch = "avr", feature = "atmega32"))]
impl BusyDelay {
    /// Approximate cycles per loop iteration (nop + decrement + branch).
    const CYCLES_PER_SPIN: u32 = 4;

    pub fn new() -> Self {
        Self
    }
}

#[cfg(all(target_arch = "avr", feature = "atmega32"))]
impl DelayNs for BusyDelay {
    fn delay_ns(&mut self, ns: u32) {
        let cycles = u64::from(ns) * u64::from(F_CPU_HZ) / 1_000_000_000;
        let spins = (cycles / u64::from(Self::CYCLES_PER_SPIN)).max(1);
        for _ in 0..spins {
            avr_device::asm::nop();
        }
    }
}

/// Accumulates requested delay instead of waiting.
#[cfg(not(target_arch = "avr"))]
#[derive(Debug, Default, Clone)]
pub struct SimDelay {
    elapsed_ns: u64,
}

#[cfg(not(target_arch = "avr"))]
impl SimDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ns(&self) -> u64 {
        self.elapsed_ns
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(not(target_arch = "avr"))]
impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}
