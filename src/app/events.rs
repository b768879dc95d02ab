//! Outbound application events.
//!
//! The [`FanController`](super::service::FanController) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use crate::control::bands::FanCommand;

/// Structured events emitted by the control loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The controller has started (carries the number of speed bands).
    Started { bands: usize },

    /// The selected fan command differs from the previous iteration's.
    BandChanged { from: FanCommand, to: FanCommand },

    /// One completed iteration.
    Telemetry(TelemetryData),
}

/// A point-in-time snapshot of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryData {
    pub iteration: u64,
    pub temperature_c: u8,
    pub command: FanCommand,
}
