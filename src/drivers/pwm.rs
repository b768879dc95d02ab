//! Timer 0 fast-PWM output on OC0.
//!
//! Non-inverting fast PWM, clk/8 prescale: with a 1 MHz core clock the
//! carrier sits just under 500 Hz regardless of duty.  Only the compare
//! register changes between calls; the motor direction pins belong to the
//! motor driver and are never touched here.

use crate::drivers::gpio::{Direction, Gpio, PinId};
use crate::drivers::registers::{Register, RegisterFile, tccr0};

/// Fast PWM (WGM01:0 = 3), clear OC0 on compare match (COM01), clk/8 (CS01).
const TCCR0_FAST_PWM_NON_INVERTING_DIV8: u8 =
    tccr0::WGM00 | tccr0::WGM01 | tccr0::COM01 | tccr0::CS01;

/// Map a duty fraction onto the 8-bit compare value, `round(duty * 255)`.
/// Values outside `[0, 1]` saturate.
pub fn duty_to_compare(duty: f32) -> u8 {
    (duty * 255.0 + 0.5) as u8
}

/// The single timer-0 PWM channel.  Constructed once by the board bring-up
/// and moved into the motor driver that owns it.
#[derive(Debug)]
pub struct PwmTimer0 {
    output: PinId,
}

impl PwmTimer0 {
    pub const fn new(output: PinId) -> Self {
        Self { output }
    }

    pub fn output_pin(&self) -> PinId {
        self.output
    }

    /// (Re)arm the waveform generator at `duty`.  The caller guarantees
    /// `duty` lies in `[0, 1]`; 0 holds the output low.
    pub fn start<R: RegisterFile>(&mut self, regs: &mut R, duty: f32) {
        Gpio::new(regs).set_direction(self.output, Direction::Output);
        regs.set_bits(Register::Tccr0, TCCR0_FAST_PWM_NON_INVERTING_DIV8);
        regs.write(Register::Tcnt0, 0);
        regs.write(Register::Ocr0, duty_to_compare(duty));
    }
}
