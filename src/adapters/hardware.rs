//! Hardware adapter: bridges the register-level drivers to domain port
//! traits.
//!
//! Owns the register file, the delay provider and every driver, exposing
//! them through [`SensorPort`], [`ActuatorPort`] and [`DisplayPort`].  It
//! is generic over the register backend, so the same code drives the real
//! ATmega32 and the host simulation.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::app::ports::{ActuatorPort, DisplayPort, SensorPort};
use crate::config::SystemConfig;
use crate::drivers::adc::Adc;
use crate::drivers::lcd::{Lcd, Row};
use crate::drivers::motor::{DcMotor, MotorState};
use crate::drivers::pwm::PwmTimer0;
use crate::drivers::registers::RegisterFile;
use crate::pins;
use crate::sensors::temperature::TemperatureSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<R, D> {
    regs: R,
    delay: D,
    adc: Adc,
    sensor: TemperatureSensor,
    motor: DcMotor,
    lcd: Lcd,
}

impl<R: RegisterFile, D: DelayNs> HardwareAdapter<R, D> {
    /// Bring up every peripheral in the fixed order LCD → motor → ADC.
    pub fn init(mut regs: R, mut delay: D, config: &SystemConfig) -> Self {
        let lcd = Lcd::new(pins::LCD_WIRING);
        lcd.init(&mut regs, &mut delay);

        let mut motor = DcMotor::new(
            pins::MOTOR_IN1,
            pins::MOTOR_IN2,
            PwmTimer0::new(pins::MOTOR_PWM),
        );
        motor.init(&mut regs);

        let adc = Adc::init(&mut regs, config.adc);
        let sensor = TemperatureSensor::new(config.sensor_channel);

        info!("hardware: peripherals up (sensor on {:?})", config.sensor_channel);
        Self {
            regs,
            delay,
            adc,
            sensor,
            motor,
            lcd,
        }
    }

    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Mutable access for injecting simulated inputs.
    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<R: RegisterFile, D: DelayNs> SensorPort for HardwareAdapter<R, D> {
    fn read_temperature(&mut self) -> u8 {
        self.sensor.read(&self.adc, &mut self.regs).celsius
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<R: RegisterFile, D: DelayNs> ActuatorPort for HardwareAdapter<R, D> {
    fn rotate(&mut self, state: MotorState, speed: u8) {
        self.motor.rotate(&mut self.regs, state, speed);
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<R: RegisterFile, D: DelayNs> DisplayPort for HardwareAdapter<R, D> {
    fn display_string_at(&mut self, row: Row, col: u8, text: &str) {
        self.lcd
            .display_string_at(&mut self.regs, &mut self.delay, row, col, text);
    }

    fn display_string(&mut self, text: &str) {
        self.lcd.display_string(&mut self.regs, &mut self.delay, text);
    }

    fn display_integer(&mut self, value: i32) {
        self.lcd.display_integer(&mut self.regs, &mut self.delay, value);
    }

    fn clear(&mut self) {
        self.lcd.clear(&mut self.regs, &mut self.delay);
    }
}
