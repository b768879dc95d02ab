//! DC fan motor driver (L293D H-bridge).
//!
//! Two direction inputs (IN1, IN2) on GPIO plus the timer-0 PWM on the
//! enable input.  Every call to [`DcMotor::rotate`] fully re-drives all
//! three outputs; the driver keeps no state to diff against, so repeating a
//! call is harmless.
//!
//! | State     | IN1  | IN2  | Duty        |
//! |-----------|------|------|-------------|
//! | `Off`     | LOW  | LOW  | 0           |
//! | `Forward` | LOW  | HIGH | speed / 100 |
//! | `Reverse` | HIGH | LOW  | speed / 100 |

use serde::{Deserialize, Serialize};

use crate::drivers::gpio::{Direction, Gpio, Level, PinId};
use crate::drivers::pwm::PwmTimer0;
use crate::drivers::registers::RegisterFile;
use crate::error::ActuatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotorState {
    Off,
    Forward,
    Reverse,
}

/// Check a speed percentage against the documented `0..=100` domain.
pub fn validate_speed(speed: u8) -> Result<u8, ActuatorError> {
    if speed <= 100 {
        Ok(speed)
    } else {
        Err(ActuatorError::SpeedOutOfRange(speed))
    }
}

pub struct DcMotor {
    in1: PinId,
    in2: PinId,
    pwm: PwmTimer0,
}

impl DcMotor {
    pub fn new(in1: PinId, in2: PinId, pwm: PwmTimer0) -> Self {
        Self { in1, in2, pwm }
    }

    /// Configure both direction pins as outputs and start the PWM at 0.
    pub fn init<R: RegisterFile>(&mut self, regs: &mut R) {
        let mut gpio = Gpio::new(regs);
        gpio.set_direction(self.in1, Direction::Output);
        gpio.set_direction(self.in2, Direction::Output);
        self.pwm.start(regs, 0.0);
        log::info!(
            "motor: in1={:?} in2={:?} pwm={:?}",
            self.in1,
            self.in2,
            self.pwm.output_pin()
        );
    }

    /// Drive the motor to `state` at `speed` percent.
    ///
    /// `speed` is trusted: values above 100 are not clamped and produce a
    /// saturated duty.  `Off` ignores `speed`.
    pub fn rotate<R: RegisterFile>(&mut self, regs: &mut R, state: MotorState, speed: u8) {
        if let Err(e) = validate_speed(speed) {
            log::warn!("motor: {e}");
        }

        let (in1, in2, duty) = match state {
            MotorState::Off => (Level::Low, Level::Low, 0.0),
            MotorState::Forward => (Level::Low, Level::High, f32::from(speed) / 100.0),
            MotorState::Reverse => (Level::High, Level::Low, f32::from(speed) / 100.0),
        };

        let mut gpio = Gpio::new(regs);
        gpio.write_pin(self.in1, in1);
        gpio.write_pin(self.in2, in2);
        self.pwm.start(regs, duty);
    }
}
