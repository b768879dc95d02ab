//! Register-level peripheral drivers.
//!
//! Every driver borrows a [`registers::RegisterFile`] per call instead of
//! owning peripherals, so the same code runs on the AVR and against the
//! host simulation.

pub mod adc;
pub mod gpio;
pub mod lcd;
pub mod motor;
pub mod pwm;
pub mod registers;
