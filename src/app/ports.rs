//! Port traits: the boundary between the control loop and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ FanController (domain)
//! ```
//!
//! The hardware adapter implements the sensor, actuator and display ports
//! on top of the register-level drivers.  The [`FanController`] consumes
//! them via generics, so the loop logic never touches registers directly
//! and runs unchanged against the mocks in the integration tests.
//!
//! [`FanController`]: super::service::FanController

use crate::drivers::lcd::Row;
use crate::drivers::motor::MotorState;

// ───────────────────────────────────────────────────────────────
// Sensor port (hardware → domain)
// ───────────────────────────────────────────────────────────────

pub trait SensorPort {
    /// One fresh, blocking temperature sample in whole °C (0..=150).
    fn read_temperature(&mut self) -> u8;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (domain → hardware)
// ───────────────────────────────────────────────────────────────

pub trait ActuatorPort {
    /// Fully re-drive the fan to `state` at `speed` percent (0..=100).
    fn rotate(&mut self, state: MotorState, speed: u8);
}

// ───────────────────────────────────────────────────────────────
// Display port (domain → character LCD)
// ───────────────────────────────────────────────────────────────

pub trait DisplayPort {
    fn display_string_at(&mut self, row: Row, col: u8, text: &str);

    /// Continue at the current cursor position.
    fn display_string(&mut self, text: &str);

    fn display_integer(&mut self, value: i32);

    fn clear(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
