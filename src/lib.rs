//! ThermoFan firmware library.
//!
//! Temperature-controlled fan for the ATmega32: LM35 sampled through the
//! on-chip ADC, an L293D-driven DC fan on timer-0 PWM, and an HD44780
//! status display.  Everything above the register file is target-neutral;
//! AVR-only code is guarded by `#[cfg(target_arch = "avr")]` within each
//! module, and the host build swaps in a simulated register file.

#![cfg_attr(target_arch = "avr", no_std)]
#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod pins;

pub mod adapters;
pub mod drivers;
pub mod sensors;
