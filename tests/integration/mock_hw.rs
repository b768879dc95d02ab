//! Mock hardware adapter for integration tests.
//!
//! Records every actuator and display call so tests can assert on the full
//! command history without touching registers.  The temperature it reports
//! is set directly by the test.

use thermofan::app::events::AppEvent;
use thermofan::app::ports::{ActuatorPort, DisplayPort, EventSink, SensorPort};
use thermofan::drivers::lcd::Row;
use thermofan::drivers::motor::MotorState;

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum HwCall {
    ReadTemperature,
    Rotate { state: MotorState, speed: u8 },
    StringAt { row: Row, col: u8, text: String },
    String(String),
    Integer(i32),
    Clear,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub temperature_c: u8,
    pub calls: Vec<HwCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new(temperature_c: u8) -> Self {
        Self {
            temperature_c,
            calls: Vec::new(),
        }
    }

    pub fn rotations(&self) -> Vec<(MotorState, u8)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HwCall::Rotate { state, speed } => Some((*state, *speed)),
                _ => None,
            })
            .collect()
    }

    pub fn last_rotation(&self) -> Option<(MotorState, u8)> {
        self.rotations().last().copied()
    }

    /// Text drawn on `row` since the last positioned write to it,
    /// including any continuation strings and integers that followed.
    pub fn text_on(&self, row: Row) -> Option<String> {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, HwCall::StringAt { row: r, .. } if *r == row))?;
        let mut text = String::new();
        for call in &self.calls[start..] {
            match call {
                HwCall::StringAt { row: r, text: t, .. } if *r == row => text.push_str(t),
                HwCall::StringAt { .. } => break,
                HwCall::String(t) => text.push_str(t),
                HwCall::Integer(v) => text.push_str(&v.to_string()),
                _ => {}
            }
        }
        Some(text)
    }
}

impl SensorPort for MockHardware {
    fn read_temperature(&mut self) -> u8 {
        self.calls.push(HwCall::ReadTemperature);
        self.temperature_c
    }
}

impl ActuatorPort for MockHardware {
    fn rotate(&mut self, state: MotorState, speed: u8) {
        self.calls.push(HwCall::Rotate { state, speed });
    }
}

impl DisplayPort for MockHardware {
    fn display_string_at(&mut self, row: Row, col: u8, text: &str) {
        self.calls.push(HwCall::StringAt {
            row,
            col,
            text: text.to_owned(),
        });
    }

    fn display_string(&mut self, text: &str) {
        self.calls.push(HwCall::String(text.to_owned()));
    }

    fn display_integer(&mut self, value: i32) {
        self.calls.push(HwCall::Integer(value));
    }

    fn clear(&mut self) {
        self.calls.push(HwCall::Clear);
    }
}

// ── Recording event sink ──────────────────────────────────────

pub struct LogSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn band_changes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::BandChanged { .. }))
            .count()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
