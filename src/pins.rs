//! Pin and channel assignments for the ThermoFan board (ATmega32, 1 MHz).
//!
//! Single source of truth: every driver is constructed from these
//! constants rather than hard-coding pin numbers.

use crate::drivers::adc::Channel;
use crate::drivers::gpio::{Pin, PinId, Port};
use crate::drivers::lcd::{DataBus, LcdWiring};

// ---------------------------------------------------------------------------
// Fan motor (L293D H-bridge)
// ---------------------------------------------------------------------------

/// L293D IN1.
pub const MOTOR_IN1: PinId = PinId::new(Port::B, Pin::P0);
/// L293D IN2.
pub const MOTOR_IN2: PinId = PinId::new(Port::B, Pin::P1);
/// OC0, timer-0 PWM into the L293D enable input.
pub const MOTOR_PWM: PinId = PinId::new(Port::B, Pin::P3);

// ---------------------------------------------------------------------------
// Character LCD
// ---------------------------------------------------------------------------

pub const LCD_RS: PinId = PinId::new(Port::D, Pin::P0);
pub const LCD_E: PinId = PinId::new(Port::D, Pin::P2);

#[cfg(not(feature = "lcd-4bit"))]
pub const LCD_BUS: DataBus = DataBus::Eight { port: Port::C };

/// DB4..DB7 on PA3..PA6.
#[cfg(feature = "lcd-4bit")]
pub const LCD_BUS: DataBus = DataBus::Four {
    port: Port::A,
    pins: [Pin::P3, Pin::P4, Pin::P5, Pin::P6],
};

pub const LCD_WIRING: LcdWiring = LcdWiring {
    rs: LCD_RS,
    enable: LCD_E,
    bus: LCD_BUS,
};

// ---------------------------------------------------------------------------
// Temperature sensor (LM35)
// ---------------------------------------------------------------------------

pub const TEMP_SENSOR_CHANNEL: Channel = Channel::Adc2;
