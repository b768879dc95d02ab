//! Application service: the fan control loop.
//!
//! [`FanController`] owns the speed-band table and the last applied
//! command.  All I/O flows through port traits injected at call sites, so
//! the whole loop is testable with mock adapters.
//!
//! ```text
//!   SensorPort ──▶ ┌──────────────────────┐ ──▶ EventSink
//!                  │     FanController     │
//! ActuatorPort ◀── │  bands · last command │ ──▶ DisplayPort
//!                  └──────────────────────┘
//! ```

use log::{debug, info};

use crate::config::SystemConfig;
use crate::control::bands::{self, FanCommand, SpeedBand};
use crate::drivers::lcd::Row;

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, DisplayPort, EventSink, SensorPort};

/// Column both status lines start at.
pub const STATUS_COLUMN: u8 = 4;
pub const LABEL_ON: &str = "FAN is ON ";
pub const LABEL_OFF: &str = "FAN is OFF";
pub const TEMP_PREFIX: &str = "Temp = ";

// ───────────────────────────────────────────────────────────────
// FanController
// ───────────────────────────────────────────────────────────────

pub struct FanController {
    bands: [SpeedBand; 4],
    last: FanCommand,
    iteration: u64,
}

impl FanController {
    /// Construct the controller from configuration.  The fan is assumed
    /// off until the first [`tick`](Self::tick).
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            bands: config.bands,
            last: FanCommand::OFF,
            iteration: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started {
            bands: self.bands.len(),
        });
        info!("FanController started with {} speed bands", self.bands.len());
    }

    /// Run forever.  Loop rate is set only by the blocking conversion and
    /// the display's fixed delays.
    pub fn run<H>(mut self, hw: &mut H, sink: &mut impl EventSink) -> !
    where
        H: SensorPort + ActuatorPort + DisplayPort,
    {
        self.start(sink);
        loop {
            self.tick(hw, sink);
        }
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// One cycle: sample → select band → drive fan → render status.
    ///
    /// The actuator is re-driven every iteration even when the command is
    /// unchanged.
    pub fn tick<H>(&mut self, hw: &mut H, sink: &mut impl EventSink) -> FanCommand
    where
        H: SensorPort + ActuatorPort + DisplayPort,
    {
        self.iteration += 1;

        let temperature_c = hw.read_temperature();
        let command = bands::select(temperature_c, &self.bands);

        hw.rotate(command.state, command.speed);
        render_status(hw, temperature_c, command);

        if command != self.last {
            sink.emit(&AppEvent::BandChanged {
                from: self.last,
                to: command,
            });
            self.last = command;
        }

        let telemetry = TelemetryData {
            iteration: self.iteration,
            temperature_c,
            command,
        };
        debug!("tick {}: {}°C -> {:?}", self.iteration, temperature_c, command);
        sink.emit(&AppEvent::Telemetry(telemetry));

        command
    }

    // ── Queries ───────────────────────────────────────────────

    /// The command applied by the most recent tick.
    pub fn last_command(&self) -> FanCommand {
        self.last
    }

    pub fn iterations(&self) -> u64 {
        self.iteration
    }
}

/// Draw the two status lines.  Two-digit readings get a trailing space so
/// a stale third digit from a previous reading is overwritten.
///
/// The padding covers one column only: dropping from three digits to one
/// leaves the previous trailing `C` visible (`Temp = 0 C C`) until a wider
/// reading overdraws it.  The screen is never cleared between iterations.
pub fn render_status(display: &mut impl DisplayPort, temperature_c: u8, command: FanCommand) {
    let label = if command.is_on() { LABEL_ON } else { LABEL_OFF };
    display.display_string_at(Row::R0, STATUS_COLUMN, label);

    display.display_string_at(Row::R1, STATUS_COLUMN, TEMP_PREFIX);
    display.display_integer(i32::from(temperature_c));
    display.display_string(if temperature_c >= 100 { " C" } else { " C " });
}
