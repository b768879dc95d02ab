//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events through the
//! `log` facade.  On the AVR target no logger is installed and every call
//! compiles down to nothing; the simulator routes them to stderr.

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                debug!(
                    "TELEM | #{} | T={}\u{00b0}C | fan={:?} speed={}%",
                    t.iteration, t.temperature_c, t.command.state, t.command.speed,
                );
            }
            AppEvent::BandChanged { from, to } => {
                info!(
                    "BAND  | {:?} {}% -> {:?} {}%",
                    from.state, from.speed, to.state, to.speed
                );
            }
            AppEvent::Started { bands } => {
                info!("START | bands={}", bands);
            }
        }
    }
}
